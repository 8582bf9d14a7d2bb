//! Configuration types for FERA Mentor.
//!
//! `FunnelConfig` represents the top-level `config.toml`. Every section and
//! field has a default, so an empty file (or no file at all) yields the
//! original product setup: `gpt-4o-mini` at temperature 0.7, a five-pair
//! history window, and a call-to-action after five user turns.

use serde::{Deserialize, Serialize};

use crate::error::FunnelError;
use crate::mentorship::{CallToAction, MentorshipInfo};

/// Highest sampling temperature accepted by OpenAI-compatible backends.
pub const MAX_TEMPERATURE: f64 = 2.0;

/// Top-level configuration for a funnel session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub mentorship: MentorshipInfo,
    pub call_to_action: CallToAction,
}

impl FunnelConfig {
    /// Check the invariants a session needs before it can be created.
    pub fn validate(&self) -> Result<(), FunnelError> {
        if self.backend.model.trim().is_empty() {
            return Err(FunnelError::configuration("model identifier must not be empty"));
        }
        let temperature = self.backend.temperature;
        if !temperature.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(FunnelError::configuration(format!(
                "temperature must be between 0.0 and {MAX_TEMPERATURE}, got {temperature}"
            )));
        }
        if self.backend.api_key_env.trim().is_empty() {
            return Err(FunnelError::configuration(
                "api_key_env must name an environment variable",
            ));
        }
        if self.session.history_window == 0 {
            return Err(FunnelError::configuration(
                "history_window must be at least 1",
            ));
        }
        if self.session.cta_threshold == 0 {
            return Err(FunnelError::configuration("cta_threshold must be at least 1"));
        }
        if self.call_to_action.url.trim().is_empty() {
            return Err(FunnelError::configuration("call_to_action.url must not be empty"));
        }
        Ok(())
    }
}

/// Completion backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Provider name used for logging and well-known base URL lookup.
    pub provider_name: String,
    /// Override the provider's default base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f64,
    /// Cap on generated tokens; `None` leaves it to the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider_name: "openai".to_string(),
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Conversation memory and trigger policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of user+assistant pairs kept in the rolling window.
    pub history_window: usize,
    /// User turns after which the call-to-action is shown (and kept shown).
    pub cta_threshold: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_window: 5,
            cta_threshold: 5,
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Delay between characters when typing out a reply; 0 prints at once.
    pub typing_delay_ms: u64,
    /// Fixed greeting shown before the first user message.
    pub greeting: String,
    /// Hint shown above the input prompt.
    pub input_hint: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 30,
            greeting: "📘 Olá! Sou o FERA Mentor, especialista em mentorias digitais! \
                       Qual é o seu nome?"
                .to_string(),
            input_hint: "Escreva sua pergunta sobre mentorias aqui...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FunnelConfig::default();
        assert_eq!(config.backend.model, "gpt-4o-mini");
        assert!((config.backend.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.backend.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.session.history_window, 5);
        assert_eq!(config.session.cta_threshold, 5);
        assert_eq!(config.display.typing_delay_ms, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: FunnelConfig = toml::from_str("").unwrap();
        assert_eq!(config, FunnelConfig::default());
    }

    #[test]
    fn test_deserialize_with_values() {
        let toml_str = r#"
[backend]
model = "gpt-4o"
temperature = 0.2
max_tokens = 512

[session]
history_window = 3
cta_threshold = 2

[call_to_action]
url = "https://example.com/talk"
"#;
        let config: FunnelConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.model, "gpt-4o");
        assert_eq!(config.backend.max_tokens, Some(512));
        assert_eq!(config.backend.provider_name, "openai");
        assert_eq!(config.session.history_window, 3);
        assert_eq!(config.session.cta_threshold, 2);
        assert_eq!(config.call_to_action.url, "https://example.com/talk");
        assert_eq!(config.call_to_action.button_label, "Conversar no WhatsApp");
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = FunnelConfig::default();
        config.backend.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FunnelError::Configuration(_)));
        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = FunnelConfig::default();
        for temperature in [-0.1, 2.5, f64::NAN] {
            config.backend.temperature = temperature;
            assert!(config.validate().is_err(), "accepted {temperature}");
        }
        config.backend.temperature = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_window_and_threshold() {
        let mut config = FunnelConfig::default();
        config.session.history_window = 0;
        assert!(config.validate().unwrap_err().to_string().contains("history_window"));

        let mut config = FunnelConfig::default();
        config.session.cta_threshold = 0;
        assert!(config.validate().unwrap_err().to_string().contains("cta_threshold"));
    }

    #[test]
    fn test_validate_rejects_missing_cta_url() {
        let mut config = FunnelConfig::default();
        config.call_to_action.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = FunnelConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: FunnelConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
