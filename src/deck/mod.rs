//! Slide catalog: the ordered, immutable deck and its slide types.

mod artifact;
mod builtin;
mod content;
mod file;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use artifact::{ArtifactError, ImageArtifact, DEFAULT_IMAGE_MIME};
pub use builtin::builtin_deck;
pub use content::{
    Column, ColumnsContent, GridContent, GridIcon, GridItem, HeroContent, ImageSlot,
    ImageSplitContent, ListContent, TableContent, TableData,
};
pub use file::DeckFileError;

/// Stable identity of a slide within its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout variant of a slide together with the payload that layout needs.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideLayout {
    Cover(HeroContent),
    SectionHeader(HeroContent),
    List(ListContent),
    ImageSplit(ImageSplitContent),
    SplitColumns(ColumnsContent),
    Table(TableContent),
    Grid(GridContent),
    Closing(HeroContent),
    /// A variant tag this build does not know. Only deck files produce it.
    Unsupported { tag: String, title: String },
}

impl SlideLayout {
    /// Variant tag as written in deck files and AI prompts.
    pub fn tag(&self) -> &str {
        match self {
            SlideLayout::Cover(_) => "COVER",
            SlideLayout::SectionHeader(_) => "SECTION_HEADER",
            SlideLayout::List(_) => "LIST",
            SlideLayout::ImageSplit(_) => "IMAGE_SPLIT",
            SlideLayout::SplitColumns(_) => "SPLIT",
            SlideLayout::Table(_) => "TABLE",
            SlideLayout::Grid(_) => "GRID",
            SlideLayout::Closing(_) => "CLOSING",
            SlideLayout::Unsupported { tag, .. } => tag,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SlideLayout::Cover(c) | SlideLayout::SectionHeader(c) | SlideLayout::Closing(c) => {
                &c.title
            }
            SlideLayout::List(c) => &c.title,
            SlideLayout::ImageSplit(c) => &c.title,
            SlideLayout::SplitColumns(c) => &c.title,
            SlideLayout::Table(c) => &c.title,
            SlideLayout::Grid(c) => &c.title,
            SlideLayout::Unsupported { title, .. } => title,
        }
    }

    /// Image slot of layouts that can show an image.
    pub fn image(&self) -> Option<&ImageSlot> {
        match self {
            SlideLayout::Cover(c) | SlideLayout::SectionHeader(c) | SlideLayout::Closing(c) => {
                Some(&c.image)
            }
            SlideLayout::List(c) => Some(&c.image),
            SlideLayout::ImageSplit(c) => Some(&c.image),
            SlideLayout::Table(c) => Some(&c.image),
            SlideLayout::SplitColumns(_)
            | SlideLayout::Grid(_)
            | SlideLayout::Unsupported { .. } => None,
        }
    }

    pub fn image_mut(&mut self) -> Option<&mut ImageSlot> {
        match self {
            SlideLayout::Cover(c) | SlideLayout::SectionHeader(c) | SlideLayout::Closing(c) => {
                Some(&mut c.image)
            }
            SlideLayout::List(c) => Some(&mut c.image),
            SlideLayout::ImageSplit(c) => Some(&mut c.image),
            SlideLayout::Table(c) => Some(&mut c.image),
            SlideLayout::SplitColumns(_)
            | SlideLayout::Grid(_)
            | SlideLayout::Unsupported { .. } => None,
        }
    }

    /// Payload as JSON, image bytes excluded.
    pub fn content_json(&self) -> serde_json::Value {
        let value = match self {
            SlideLayout::Cover(c) | SlideLayout::SectionHeader(c) | SlideLayout::Closing(c) => {
                serde_json::to_value(c)
            }
            SlideLayout::List(c) => serde_json::to_value(c),
            SlideLayout::ImageSplit(c) => serde_json::to_value(c),
            SlideLayout::SplitColumns(c) => serde_json::to_value(c),
            SlideLayout::Table(c) => serde_json::to_value(c),
            SlideLayout::Grid(c) => serde_json::to_value(c),
            SlideLayout::Unsupported { title, .. } => {
                return serde_json::json!({ "title": title });
            }
        };
        value.unwrap_or_else(|_| serde_json::json!({ "title": self.title() }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: SlideId,
    pub layout: SlideLayout,
}

impl Slide {
    pub fn new(id: u32, layout: SlideLayout) -> Self {
        Self {
            id: SlideId(id),
            layout,
        }
    }

    pub fn title(&self) -> &str {
        self.layout.title()
    }

    pub fn image_prompt(&self) -> Option<&str> {
        self.layout.image().and_then(ImageSlot::prompt)
    }

    pub fn artifact(&self) -> Option<&ImageArtifact> {
        self.layout.image().and_then(|slot| slot.artifact.as_ref())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has no slides")]
    Empty,

    #[error("slide id {0} appears more than once")]
    DuplicateId(SlideId),

    #[error("slide id {next} follows {previous}; ids must increase in deck order")]
    OutOfOrder { previous: SlideId, next: SlideId },
}

/// Ordered collection of slides. Non-empty, ids strictly increasing.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for pair in slides.windows(2) {
            let (previous, next) = (pair[0].id, pair[1].id);
            if next == previous {
                return Err(DeckError::DuplicateId(next));
            }
            if next < previous {
                return Err(DeckError::OutOfOrder { previous, next });
            }
        }
        Ok(Self {
            title: title.into(),
            slides,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn position_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }
}
