//! Speaker-note prompt construction.

use crate::deck::Slide;

/// Shown when the model answers with no text.
pub const NO_NOTES_FALLBACK: &str = "No notes generated.";

/// Shown when the request fails for any reason.
pub const NOTES_ERROR_MESSAGE: &str = "Error: Unable to generate notes at this time.";

/// Build the speaker-notes prompt for `slide` of the presentation `deck_title`.
pub fn build_notes_prompt(slide: &Slide, deck_title: &str) -> String {
    let content = slide.layout.content_json();
    format!(
        r#"You are an expert technical mentor and public speaking coach.
I need speaker notes for a presentation slide about "{deck_title}".

Slide Title: {title}
Slide Type: {variant}
Slide Content: {content}

Please provide:
1. A brief "Hook" to start this slide (1 sentence).
2. Key talking points elaborating on the content (bullet points).
3. A "Pro Tip" for the engineer listening.

Keep the tone professional, encouraging, and insightful.
Format correctly in Markdown."#,
        title = slide.title(),
        variant = slide.layout.tag(),
    )
}

/// Map a model response to displayable notes text.
pub fn notes_or_fallback(text: String) -> String {
    if text.trim().is_empty() {
        NO_NOTES_FALLBACK.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{ImageArtifact, ImageSlot, ImageSplitContent, SlideLayout};

    fn sample_slide() -> Slide {
        Slide::new(
            7,
            SlideLayout::ImageSplit(ImageSplitContent {
                title: "Marginal value".to_string(),
                points: vec!["Interns plus AI".to_string()],
                quote: None,
                image: ImageSlot {
                    prompt: Some("a robot hand".to_string()),
                    artifact: Some(ImageArtifact::new("image/png", "HUGEPAYLOAD")),
                },
            }),
        )
    }

    #[test]
    fn prompt_embeds_title_variant_and_content() {
        let prompt = build_notes_prompt(&sample_slide(), "Engineers in the AI era");
        assert!(prompt.contains("about \"Engineers in the AI era\""));
        assert!(prompt.contains("Slide Title: Marginal value"));
        assert!(prompt.contains("Slide Type: IMAGE_SPLIT"));
        assert!(prompt.contains("Interns plus AI"));
        assert!(prompt.contains("a robot hand"));
        assert!(prompt.contains("\"Pro Tip\""));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn prompt_excludes_image_bytes() {
        let prompt = build_notes_prompt(&sample_slide(), "deck");
        assert!(!prompt.contains("HUGEPAYLOAD"));
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(notes_or_fallback(String::new()), NO_NOTES_FALLBACK);
        assert_eq!(notes_or_fallback("  \n".to_string()), NO_NOTES_FALLBACK);
        assert_eq!(notes_or_fallback("## Hook".to_string()), "## Hook");
    }
}
