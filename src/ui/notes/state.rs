//! State for the notes panel.

use crate::deck::SlideId;
use crate::ui::mvi::UiState;

/// Where the notes request stands. Text is always stored together with the
/// slide it was generated for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotesPhase {
    /// Nothing requested yet.
    #[default]
    Empty,

    /// Waiting for the model.
    Loading {
        slide_id: SlideId,
        animation_tick: u8,
    },

    /// Notes available.
    Ready { slide_id: SlideId, text: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotesPanelState {
    pub open: bool,
    pub phase: NotesPhase,
}

impl UiState for NotesPanelState {}

impl NotesPanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, NotesPhase::Loading { .. })
    }

    /// Slide the current or pending notes belong to.
    pub fn slide_id(&self) -> Option<SlideId> {
        match &self.phase {
            NotesPhase::Empty => None,
            NotesPhase::Loading { slide_id, .. } | NotesPhase::Ready { slide_id, .. } => {
                Some(*slide_id)
            }
        }
    }

    /// Notes text, only if it was generated for `slide_id`.
    pub fn text_for(&self, slide_id: SlideId) -> Option<&str> {
        match &self.phase {
            NotesPhase::Ready { slide_id: id, text } if *id == slide_id => Some(text),
            _ => None,
        }
    }
}
