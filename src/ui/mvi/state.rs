//! Base trait for UI state in MVI architecture.

/// Marker trait for state snapshots.
///
/// States are replaced, never mutated in place: `Clone` produces the
/// next value, `PartialEq` lets the owner skip publishing unchanged
/// snapshots, and `Default` gives a placeholder while the owner moves
/// the current value into the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
