//! Presentation controller.
//!
//! Owns navigation, the per-slide image cache, the notes panel and footer
//! notices. AI work is never started here: the request methods hand back a
//! job for the runtime to execute, and the runtime reports the result through
//! the matching `complete_*` method. All mutation happens on the UI thread.

mod notice;

use std::collections::HashMap;
use std::sync::Arc;

use crate::deck::{Deck, ImageArtifact, Slide, SlideId};
use crate::ui::mvi::Reducer;
use crate::ui::notes::{NotesIntent, NotesPanelState, NotesReducer};

pub use notice::{Notice, NoticeLevel};

/// Default lifetime of a notice, in ticks.
pub const DEFAULT_NOTICE_TICKS: u16 = 16;

/// Speaker-notes request to run: the slide as currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesJob {
    pub slide: Slide,
}

/// Image request to run for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub slide_id: SlideId,
    pub prompt: String,
}

/// Result of an image request as reported back by the runtime.
pub type ImageOutcome = Result<Option<ImageArtifact>, String>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct Presenter {
    deck: Arc<Deck>,
    current_index: usize,
    generated_images: HashMap<SlideId, ImageArtifact>,
    notes: NotesPanelState,
    image_in_flight: Option<SlideId>,
    notice: Option<Notice>,
    notice_ticks: u16,
}

impl Presenter {
    pub fn new(deck: Arc<Deck>) -> Self {
        Self {
            deck,
            current_index: 0,
            generated_images: HashMap::new(),
            notes: NotesPanelState::default(),
            image_in_flight: None,
            notice: None,
            notice_ticks: DEFAULT_NOTICE_TICKS,
        }
    }

    pub fn with_notice_ticks(mut self, ticks: u16) -> Self {
        self.notice_ticks = ticks.max(1);
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position and deck length, for counters and progress bars.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, self.deck.len())
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.deck.len()
    }

    /// Move to the next slide. No-op on the last slide.
    pub fn advance(&mut self) {
        if !self.is_last() {
            self.current_index += 1;
            tracing::debug!(index = self.current_index, "advance");
        }
    }

    /// Move to the previous slide. No-op on the first slide.
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            tracing::debug!(index = self.current_index, "retreat");
        }
    }

    /// Jump to `index`, clamped into the deck.
    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index.min(self.deck.len().saturating_sub(1));
    }

    /// The current slide with its image taken from the session cache when one
    /// has been generated, otherwise as authored.
    pub fn current_slide(&self) -> Slide {
        let raw = self
            .deck
            .get(self.current_index)
            .or_else(|| self.deck.slides().first())
            .cloned()
            .unwrap_or_else(|| Slide::new(0, placeholder_layout()));
        self.merge_cached_image(raw)
    }

    fn merge_cached_image(&self, mut slide: Slide) -> Slide {
        if let Some(cached) = self.generated_images.get(&slide.id) {
            if let Some(slot) = slide.layout.image_mut() {
                slot.artifact = Some(cached.clone());
            }
        }
        slide
    }

    /// Image generated this session for `slide_id`.
    pub fn cached_image(&self, slide_id: SlideId) -> Option<&ImageArtifact> {
        self.generated_images.get(&slide_id)
    }

    // -- Speaker notes -------------------------------------------------------

    pub fn notes(&self) -> &NotesPanelState {
        &self.notes
    }

    /// Open the notes panel and, unless notes for the current slide are cached
    /// or a request is already running, start a new request.
    pub fn request_notes(&mut self) -> Option<NotesJob> {
        dispatch_mvi!(self, notes, NotesReducer, NotesIntent::Open);

        let slide = self.current_slide();
        if self.notes.text_for(slide.id).is_some() {
            return None;
        }
        if self.notes.is_loading() {
            tracing::debug!("notes request already in flight; ignoring");
            return None;
        }

        dispatch_mvi!(
            self,
            notes,
            NotesReducer,
            NotesIntent::Start { slide_id: slide.id }
        );
        tracing::info!(slide_id = %slide.id, "requesting speaker notes");
        Some(NotesJob { slide })
    }

    /// Store notes generated for `slide_id`. Dropped unless that request is
    /// the one pending.
    pub fn complete_notes(&mut self, slide_id: SlideId, text: String) {
        dispatch_mvi!(
            self,
            notes,
            NotesReducer,
            NotesIntent::Complete { slide_id, text }
        );
    }

    pub fn close_notes(&mut self) {
        dispatch_mvi!(self, notes, NotesReducer, NotesIntent::Close);
    }

    // -- Image generation ----------------------------------------------------

    /// True while any image generation is outstanding.
    pub fn image_in_flight(&self) -> bool {
        self.image_in_flight.is_some()
    }

    /// True while an image is being generated for `slide_id`.
    pub fn is_generating(&self, slide_id: SlideId) -> bool {
        self.image_in_flight == Some(slide_id)
    }

    /// Start generating an image for the current slide.
    ///
    /// Returns `None` when the slide has no prompt or a generation is already
    /// running.
    pub fn request_image(&mut self) -> Option<ImageJob> {
        if self.image_in_flight.is_some() {
            self.notify(NoticeLevel::Info, "An image is already being generated");
            return None;
        }

        let slide = self.current_slide();
        let Some(prompt) = slide.image_prompt() else {
            self.notify(NoticeLevel::Info, "This slide has no image prompt");
            return None;
        };

        self.image_in_flight = Some(slide.id);
        tracing::info!(slide_id = %slide.id, "requesting slide image");
        Some(ImageJob {
            slide_id: slide.id,
            prompt: prompt.to_string(),
        })
    }

    /// Record the outcome of an image request for `slide_id`.
    ///
    /// Only a returned image touches the cache; failures and empty results
    /// leave it as it was and raise an error notice.
    pub fn complete_image(&mut self, slide_id: SlideId, outcome: ImageOutcome) {
        if self.image_in_flight == Some(slide_id) {
            self.image_in_flight = None;
        }

        match outcome {
            Ok(Some(artifact)) => {
                tracing::info!(slide_id = %slide_id, artifact = ?artifact, "image generated");
                self.generated_images.insert(slide_id, artifact);
                self.notify(NoticeLevel::Info, format!("Image ready for slide {}", slide_id));
            }
            Ok(None) => {
                tracing::warn!(slide_id = %slide_id, "image response had no image data");
                self.notify(
                    NoticeLevel::Error,
                    "Failed to generate image: the model returned no image data",
                );
            }
            Err(message) => {
                tracing::error!(slide_id = %slide_id, error = %message, "image generation failed");
                self.notify(
                    NoticeLevel::Error,
                    format!("Failed to generate image: {}", message),
                );
            }
        }
    }

    // -- Notices and ticks ---------------------------------------------------

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice::new(level, message, self.notice_ticks));
    }

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, notes, NotesReducer, NotesIntent::AnimationTick);
        if let Some(notice) = self.notice.as_mut() {
            if !notice.tick() {
                self.notice = None;
            }
        }
    }
}

// Decks are never empty, so this is only reachable if that invariant breaks.
fn placeholder_layout() -> crate::deck::SlideLayout {
    crate::deck::SlideLayout::Unsupported {
        tag: "EMPTY".to_string(),
        title: String::new(),
    }
}
