//! Loading decks from TOML files.
//!
//! ```toml
//! title = "Quarterly review"
//!
//! [[slides]]
//! id = 1
//! variant = "cover"
//! title = "Q3"
//! subtitle = "What changed"
//! image_prompt = "A skyline at dawn"
//! ```
//!
//! Variant tags are case-insensitive and accept `-` or `_` separators.
//! Unknown tags load as [`SlideLayout::Unsupported`] so authoring mistakes stay
//! visible instead of aborting the presentation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::artifact::ArtifactError;
use super::content::{
    Column, ColumnsContent, GridContent, GridIcon, GridItem, HeroContent, ImageSlot,
    ImageSplitContent, ListContent, TableContent, TableData,
};
use super::{Deck, DeckError, ImageArtifact, Slide, SlideLayout};

#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("Failed to read deck file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Slide {id}: {message}")]
    InvalidSlide { id: u32, message: String },

    #[error("Slide {id}: invalid generated_image: {source}")]
    InvalidImage {
        id: u32,
        #[source]
        source: ArtifactError,
    },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slides: Vec<RawSlide>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    id: u32,
    variant: String,
    title: String,
    subtitle: Option<String>,
    quote: Option<String>,
    #[serde(default)]
    points: Vec<String>,
    columns: Option<RawColumns>,
    table: Option<RawTable>,
    #[serde(default)]
    grid_items: Vec<RawGridItem>,
    image_prompt: Option<String>,
    generated_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawColumns {
    left_title: String,
    #[serde(default)]
    left_points: Vec<String>,
    right_title: String,
    #[serde(default)]
    right_points: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawGridItem {
    title: String,
    #[serde(alias = "description")]
    desc: String,
    #[serde(default)]
    icon: Option<String>,
}

impl Deck {
    /// Load a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DeckFileError> {
        let content = fs::read_to_string(path).map_err(|e| DeckFileError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fallback_title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Deck".to_string());
        Self::from_toml_str(&content, &fallback_title)
    }

    /// Parse a deck from TOML text. `fallback_title` is used when the file has
    /// no top-level `title`.
    pub fn from_toml_str(content: &str, fallback_title: &str) -> Result<Self, DeckFileError> {
        let file: DeckFile = toml::from_str(content)?;
        let slides = file
            .slides
            .into_iter()
            .map(RawSlide::into_slide)
            .collect::<Result<Vec<_>, _>>()?;
        let title = file.title.unwrap_or_else(|| fallback_title.to_string());
        Ok(Deck::new(title, slides)?)
    }
}

impl RawSlide {
    fn into_slide(self) -> Result<Slide, DeckFileError> {
        let id = self.id;
        if id == 0 {
            return Err(DeckFileError::InvalidSlide {
                id,
                message: "ids start at 1".to_string(),
            });
        }

        let artifact = self
            .generated_image
            .as_deref()
            .map(ImageArtifact::from_data_uri)
            .transpose()
            .map_err(|source| DeckFileError::InvalidImage { id, source })?;
        let image = ImageSlot {
            prompt: self.image_prompt,
            artifact,
        };

        let hero = |title: String, subtitle, quote, image| HeroContent {
            title,
            subtitle,
            quote,
            image,
        };

        let layout = match normalize_tag(&self.variant).as_str() {
            "cover" => SlideLayout::Cover(hero(self.title, self.subtitle, self.quote, image)),
            "section_header" => {
                SlideLayout::SectionHeader(hero(self.title, self.subtitle, self.quote, image))
            }
            "closing" => SlideLayout::Closing(hero(self.title, self.subtitle, self.quote, image)),
            "list" => SlideLayout::List(ListContent {
                title: self.title,
                points: self.points,
                quote: self.quote,
                image,
            }),
            "image_split" => SlideLayout::ImageSplit(ImageSplitContent {
                title: self.title,
                points: self.points,
                quote: self.quote,
                image,
            }),
            "split" | "split_columns" => {
                let columns = self.columns.ok_or_else(|| DeckFileError::InvalidSlide {
                    id,
                    message: "split-columns slide needs a [columns] table".to_string(),
                })?;
                SlideLayout::SplitColumns(ColumnsContent {
                    title: self.title,
                    subtitle: self.subtitle,
                    left: Column {
                        title: columns.left_title,
                        points: columns.left_points,
                    },
                    right: Column {
                        title: columns.right_title,
                        points: columns.right_points,
                    },
                    quote: self.quote,
                })
            }
            "table" => {
                let table = self.table.ok_or_else(|| DeckFileError::InvalidSlide {
                    id,
                    message: "table slide needs a [table] section".to_string(),
                })?;
                SlideLayout::Table(TableContent {
                    title: self.title,
                    subtitle: self.subtitle,
                    table: table.into_data(id)?,
                    image,
                })
            }
            "grid" => SlideLayout::Grid(GridContent {
                title: self.title,
                subtitle: self.subtitle,
                items: self
                    .grid_items
                    .into_iter()
                    .map(|item| GridItem {
                        title: item.title,
                        description: item.desc,
                        icon: item
                            .icon
                            .as_deref()
                            .map(GridIcon::from_tag)
                            .unwrap_or_default(),
                    })
                    .collect(),
                quote: self.quote,
            }),
            _ => SlideLayout::Unsupported {
                tag: self.variant,
                title: self.title,
            },
        };

        Ok(Slide::new(id, layout))
    }
}

impl RawTable {
    fn into_data(self, id: u32) -> Result<TableData, DeckFileError> {
        let headers = to_triple(self.headers).map_err(|len| DeckFileError::InvalidSlide {
            id,
            message: format!("table needs exactly 3 headers, found {len}"),
        })?;
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                to_triple(cells).map_err(|len| DeckFileError::InvalidSlide {
                    id,
                    message: format!("table row {} needs exactly 3 cells, found {len}", row + 1),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TableData { headers, rows })
    }
}

fn to_triple(cells: Vec<String>) -> Result<[String; 3], usize> {
    let len = cells.len();
    <[String; 3]>::try_from(cells).map_err(|_| len)
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase().replace('-', "_")
}
