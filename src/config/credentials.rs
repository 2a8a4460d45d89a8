//! Credential resolution for the AI service.
//!
//! The key comes either from `ai.api_key` in the config file or from the
//! environment variable named by `ai.api_key_env`.

use super::types::AiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Environment variable that was consulted.
        env_var: String,
    },
}

impl AiConfig {
    /// Resolve the API key from config or the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` in place of the process environment.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        let inline = self.api_key.clone().filter(|k| !k.trim().is_empty());
        match inline.or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty())) {
            Some(key) => CredentialStatus::Configured(SecureString::new(key)),
            None => CredentialStatus::Unconfigured {
                env_var: self.api_key_env.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn inline_key_wins_over_environment() {
        let config = AiConfig {
            api_key: Some("inline".to_string()),
            ..AiConfig::default()
        };
        match config.resolve_credential_with(|_| Some("from-env".to_string())) {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "inline"),
            other => panic!("expected Configured, got {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_named_env_var() {
        let config = AiConfig {
            api_key_env: "DECK_KEY".to_string(),
            ..AiConfig::default()
        };
        let status = config.resolve_credential_with(|name| {
            (name == "DECK_KEY").then(|| "env-key".to_string())
        });
        match status {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "env-key"),
            other => panic!("expected Configured, got {:?}", other),
        }
    }

    #[test]
    fn blank_values_are_unconfigured() {
        let config = AiConfig {
            api_key: Some("  ".to_string()),
            ..AiConfig::default()
        };
        match config.resolve_credential_with(|_| Some(String::new())) {
            CredentialStatus::Unconfigured { env_var } => assert_eq!(env_var, "GEMINI_API_KEY"),
            other => panic!("expected Unconfigured, got {:?}", other),
        }
    }
}
