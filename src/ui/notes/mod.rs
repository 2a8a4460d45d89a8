//! AI speaker-coach panel.
//!
//! - `state.rs` - panel visibility and the notes request phase
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `panel.rs` - rendering

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::NotesIntent;
pub use panel::render_notes_panel;
pub use reducer::NotesReducer;
pub use state::{NotesPanelState, NotesPhase};
