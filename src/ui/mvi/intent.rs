//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent describes one transition request: a user interaction
/// (opening the event dialog, navigating to a day) or a configuration
/// push from the host. Intents are closed enums, so every kind a reducer
/// can receive is known at compile time.
pub trait Intent: Send + 'static {}
