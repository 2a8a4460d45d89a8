//! Per-variant slide payloads.

use serde::Serialize;

use super::artifact::ImageArtifact;

/// Optional image attached to a slide: the prompt used to generate one and the
/// image itself once it exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageSlot {
    #[serde(rename = "imagePrompt", skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Deck-authored or generated image. Never serialized: the payload is
    /// megabytes of base64 and means nothing to a language model.
    #[serde(skip)]
    pub artifact: Option<ImageArtifact>,
}

impl ImageSlot {
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            artifact: None,
        }
    }

    /// Prompt text, ignoring prompts that are blank.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// True when the slot has a prompt but no image yet.
    pub fn can_generate(&self) -> bool {
        self.artifact.is_none() && self.prompt().is_some()
    }
}

/// Title-centric payload shared by cover, section-header and closing slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(flatten)]
    pub image: ImageSlot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListContent {
    pub title: String,
    pub points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(flatten)]
    pub image: ImageSlot,
}

/// Bullet points on one side, an image area on the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageSplitContent {
    pub title: String,
    pub points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(flatten)]
    pub image: ImageSlot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column {
    pub title: String,
    pub points: Vec<String>,
}

/// Two independently titled bullet columns, typically a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnsContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub left: Column,
    pub right: Column,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

/// Fixed three-column table: label, detail, outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableData {
    pub headers: [String; 3],
    pub rows: Vec<[String; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub table: TableData,
    #[serde(flatten)]
    pub image: ImageSlot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridIcon {
    Zap,
    Shield,
    Book,
    #[default]
    Layout,
}

impl GridIcon {
    /// Parse an icon tag. Unknown tags get the generic layout icon.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "zap" => GridIcon::Zap,
            "shield" => GridIcon::Shield,
            "book" => GridIcon::Book,
            _ => GridIcon::Layout,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            GridIcon::Zap => "⚡",
            GridIcon::Shield => "🛡",
            GridIcon::Book => "📖",
            GridIcon::Layout => "▦",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridItem {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub icon: GridIcon,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<GridItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tags_fall_back_to_layout() {
        assert_eq!(GridIcon::from_tag("zap"), GridIcon::Zap);
        assert_eq!(GridIcon::from_tag(" Shield "), GridIcon::Shield);
        assert_eq!(GridIcon::from_tag("book"), GridIcon::Book);
        assert_eq!(GridIcon::from_tag("layout"), GridIcon::Layout);
        assert_eq!(GridIcon::from_tag("rocket"), GridIcon::Layout);
    }

    #[test]
    fn blank_prompt_cannot_generate() {
        let slot = ImageSlot::with_prompt("   ");
        assert_eq!(slot.prompt(), None);
        assert!(!slot.can_generate());
        assert!(ImageSlot::with_prompt("a city").can_generate());
    }

    #[test]
    fn artifact_is_not_serialized() {
        let content = HeroContent {
            title: "Hello".into(),
            image: ImageSlot {
                prompt: Some("sunrise".into()),
                artifact: Some(ImageArtifact::new("image/png", "AAAA")),
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["imagePrompt"], "sunrise");
        assert!(!json.to_string().contains("AAAA"));
    }
}
