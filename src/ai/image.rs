//! Image prompt styling and response extraction.

use crate::deck::{ImageArtifact, DEFAULT_IMAGE_MIME};

use super::gemini::GenerateContentResponse;

/// Appended to every image prompt.
pub const IMAGE_STYLE_SUFFIX: &str = " The style should be high-tech, cinematic, professional digital art, suitable for a tech presentation background. 16:9 aspect ratio.";

pub fn styled_image_prompt(prompt: &str) -> String {
    format!("{}{}", prompt, IMAGE_STYLE_SUFFIX)
}

/// First part carrying inline image bytes, as an artifact.
pub fn extract_image(response: &GenerateContentResponse) -> Option<ImageArtifact> {
    response.parts().iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        if inline.data.is_empty() {
            return None;
        }
        let mime = inline
            .mime_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME);
        Some(ImageArtifact::new(mime, inline.data.clone()))
    })
}
