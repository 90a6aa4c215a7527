//! Model-View-Intent (MVI) primitives shared by the widget state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of widget state
//! - **Intent**: one requested transition (UI interaction or config push)
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
