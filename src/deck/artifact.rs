//! Generated image artifacts in self-describing inline form.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Mime type assumed when the service omits one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("not a data URI (expected 'data:<mime>;base64,<payload>')")]
    NotDataUri,

    #[error("data URI is not base64-encoded")]
    NotBase64,

    #[error("image payload is empty")]
    Empty,
}

/// An image as mime type plus base64 payload, ready for inline display.
///
/// Decoded size and pixel dimensions are worked out once at construction.
/// The payload is shared, so clones stay cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    mime_type: String,
    data: Arc<str>,
    decoded_len: usize,
    dimensions: Option<(u32, u32)>,
}

impl ImageArtifact {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Arc<str>>) -> Self {
        let data = data.into();
        let decoded_len = decoded_len_of(&data);
        let dimensions = probe_dimensions(&data);
        Self {
            mime_type: mime_type.into(),
            data,
            decoded_len,
            dimensions,
        }
    }

    /// Parse `data:<mime>;base64,<payload>`.
    pub fn from_data_uri(uri: &str) -> Result<Self, ArtifactError> {
        let rest = uri.trim().strip_prefix("data:").ok_or(ArtifactError::NotDataUri)?;
        let (header, payload) = rest.split_once(',').ok_or(ArtifactError::NotDataUri)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(ArtifactError::NotBase64)?;
        if payload.is_empty() {
            return Err(ArtifactError::Empty);
        }
        let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
        Ok(Self::new(mime, payload))
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Size of the decoded image in bytes, estimated from the payload length.
    pub fn decoded_len(&self) -> usize {
        self.decoded_len
    }

    /// Pixel dimensions read from the image header, if the format is known.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// One-line description for places that cannot draw the image.
    pub fn summary(&self) -> String {
        let size = human_size(self.decoded_len);
        match self.dimensions {
            Some((w, h)) => format!("{} {}×{} ({})", self.mime_type, w, h, size),
            None => format!("{} ({})", self.mime_type, size),
        }
    }
}

fn decoded_len_of(data: &str) -> usize {
    let padding = data.bytes().rev().take_while(|b| *b == b'=').count();
    (data.len() / 4 * 3).saturating_sub(padding)
}

fn probe_dimensions(data: &str) -> Option<(u32, u32)> {
    let bytes = STANDARD.decode(data.as_bytes()).ok()?;
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

// Payloads are large; keep them out of debug output.
impl fmt::Debug for ImageArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageArtifact")
            .field("mime_type", &self.mime_type)
            .field("data_len", &self.data.len())
            .finish()
    }
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
