//! Configuration and per-provider defaults for OpenAI-compatible backends.
//!
//! Each provider that speaks the OpenAI chat completions protocol gets a
//! factory function returning an [`OpenAiCompatConfig`] with the right base URL.

use secrecy::SecretString;

/// Configuration for an OpenAI-compatible provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. Does not derive
/// `Debug`; the API key stays wrapped until the client is built.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "gemini").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves its model empty.
    pub model: String,
}

/// OpenAI. Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
        model: model.into(),
    }
}

/// Google Gemini (OpenAI-compatible beta endpoint).
///
/// Base URL: `https://generativelanguage.googleapis.com/v1beta/openai`
pub fn gemini_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "gemini".into(),
        base_url: "https://generativelanguage.googleapis.com/v1beta/openai".into(),
        api_key,
        model: model.into(),
    }
}

/// Mistral AI. Base URL: `https://api.mistral.ai/v1`
pub fn mistral_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "mistral".into(),
        base_url: "https://api.mistral.ai/v1".into(),
        api_key,
        model: model.into(),
    }
}

/// Any other endpoint speaking the chat completions protocol
/// (self-hosted gateways, proxies).
pub fn custom(
    provider_name: &str,
    base_url: &str,
    api_key: SecretString,
    model: &str,
) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
    }
}

/// Look up the defaults for a well-known provider name.
///
/// Unknown names hand the key back so the caller can choose a fallback.
pub fn well_known(
    provider_name: &str,
    api_key: SecretString,
    model: &str,
) -> Result<OpenAiCompatConfig, SecretString> {
    match provider_name {
        "openai" => Ok(openai_defaults(api_key, model)),
        "gemini" => Ok(gemini_defaults(api_key, model)),
        "mistral" => Ok(mistral_defaults(api_key, model)),
        _ => Err(api_key),
    }
}
