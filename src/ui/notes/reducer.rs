//! Reducer for the notes panel.

use crate::ui::mvi::Reducer;

use super::intent::NotesIntent;
use super::state::{NotesPanelState, NotesPhase};

pub struct NotesReducer;

impl Reducer for NotesReducer {
    type State = NotesPanelState;
    type Intent = NotesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotesIntent::Open => NotesPanelState {
                open: true,
                ..state
            },

            NotesIntent::Close => NotesPanelState {
                open: false,
                ..state
            },

            NotesIntent::Start { slide_id } => NotesPanelState {
                phase: NotesPhase::Loading {
                    slide_id,
                    animation_tick: 0,
                },
                ..state
            },

            NotesIntent::Complete { slide_id, text } => match state.phase {
                // Only the request we are waiting for may fill the panel.
                NotesPhase::Loading { slide_id: pending, .. } if pending == slide_id => {
                    NotesPanelState {
                        phase: NotesPhase::Ready { slide_id, text },
                        ..state
                    }
                }
                _ => state,
            },

            NotesIntent::AnimationTick => match state.phase {
                NotesPhase::Loading {
                    slide_id,
                    animation_tick,
                } => NotesPanelState {
                    phase: NotesPhase::Loading {
                        slide_id,
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },
        }
    }
}
