//! Generative AI augmentation: speaker notes and slide images via Gemini.
//!
//! The two operations deliberately differ in error handling:
//! [`AiService::generate_notes`] always yields displayable text, while
//! [`AiService::generate_image`] returns its errors to the caller.

mod error;
mod gemini;
mod image;
mod notes;
mod service;

pub use error::AiError;
pub use gemini::{Candidate, Content, GeminiClient, GenerateContentResponse, InlineData, Part};
pub use image::{extract_image, styled_image_prompt, IMAGE_STYLE_SUFFIX};
pub use notes::{build_notes_prompt, NOTES_ERROR_MESSAGE, NO_NOTES_FALLBACK};
pub use service::AiService;
