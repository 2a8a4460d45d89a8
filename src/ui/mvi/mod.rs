//! Model-View-Intent primitives for the presenter's UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are the only place a feature's state changes. Side effects such
//! as AI requests are issued by the presenter, never by a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
