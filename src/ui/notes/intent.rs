//! Intents for the notes panel.

use crate::deck::SlideId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotesIntent {
    /// Show the panel.
    Open,

    /// Hide the panel. Cached notes are kept.
    Close,

    /// A notes request for `slide_id` was issued.
    Start { slide_id: SlideId },

    /// Notes for `slide_id` arrived.
    Complete { slide_id: SlideId, text: String },

    /// Spinner tick.
    AnimationTick,
}

impl Intent for NotesIntent {}
