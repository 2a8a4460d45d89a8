//! The two AI augmentation operations behind one explicitly constructed handle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{AiConfig, CredentialStatus};
use crate::deck::{ImageArtifact, Slide};

use super::error::AiError;
use super::gemini::{GeminiClient, Part};
use super::image::{extract_image, styled_image_prompt};
use super::notes::{build_notes_prompt, notes_or_fallback, NOTES_ERROR_MESSAGE};

/// Outcome of the first client construction. Failures are remembered so a
/// missing key is reported, not retried.
enum ClientSlot {
    Unresolved,
    Ready(Arc<GeminiClient>),
    MissingCredential { env_var: String },
    BuildFailed(String),
}

/// Speaker-notes and image generation.
///
/// Built at startup without touching the credential. The Gemini client is
/// created on the first call to either operation.
pub struct AiService {
    config: AiConfig,
    deck_title: String,
    client: Mutex<ClientSlot>,
}

impl AiService {
    pub fn new(config: AiConfig, deck_title: impl Into<String>) -> Self {
        Self {
            config,
            deck_title: deck_title.into(),
            client: Mutex::new(ClientSlot::Unresolved),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Shared client, constructing it on first use.
    pub fn client(&self) -> Result<Arc<GeminiClient>, AiError> {
        let mut slot = self.client.lock();
        if let ClientSlot::Unresolved = *slot {
            *slot = match self.config.resolve_credential() {
                CredentialStatus::Configured(key) => match GeminiClient::new(&self.config, key) {
                    Ok(client) => ClientSlot::Ready(Arc::new(client)),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to build Gemini client");
                        ClientSlot::BuildFailed(err.to_string())
                    }
                },
                CredentialStatus::Unconfigured { env_var } => {
                    tracing::error!(env_var = %env_var, "Gemini API key is not configured");
                    ClientSlot::MissingCredential { env_var }
                }
            };
        }

        match &*slot {
            ClientSlot::Ready(client) => Ok(Arc::clone(client)),
            ClientSlot::MissingCredential { env_var } => Err(AiError::MissingCredential {
                env_var: env_var.clone(),
            }),
            ClientSlot::BuildFailed(message) => Err(AiError::ClientBuild(message.clone())),
            ClientSlot::Unresolved => Err(AiError::ClientBuild("client not resolved".to_string())),
        }
    }

    /// Generate speaker notes for `slide`.
    ///
    /// Never fails: errors become [`NOTES_ERROR_MESSAGE`] and an empty answer
    /// becomes the no-notes fallback.
    pub async fn generate_notes(&self, slide: &Slide) -> String {
        match self.try_generate_notes(slide).await {
            Ok(text) => notes_or_fallback(text),
            Err(err) => {
                tracing::error!(slide_id = %slide.id, error = %err, "Error generating speaker notes");
                NOTES_ERROR_MESSAGE.to_string()
            }
        }
    }

    async fn try_generate_notes(&self, slide: &Slide) -> Result<String, AiError> {
        let client = self.client()?;
        let prompt = build_notes_prompt(slide, &self.deck_title);
        client.generate_text(&self.config.notes_model, &prompt).await
    }

    /// Generate an image for `prompt`.
    ///
    /// `Ok(None)` when the response carries no inline image. Errors propagate;
    /// the caller decides how to present them.
    pub async fn generate_image(&self, prompt: &str) -> Result<Option<ImageArtifact>, AiError> {
        let client = self.client()?;
        let response = client
            .generate_content(
                &self.config.image_model,
                vec![Part::text(styled_image_prompt(prompt))],
            )
            .await?;

        let artifact = extract_image(&response);
        if artifact.is_none() {
            tracing::warn!("No image data found in response");
        }
        Ok(artifact)
    }
}
