//! Completion backend implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`] trait
//! defined in `fera-core`, plus a factory ([`create_provider`]) that builds
//! the right provider from a [`BackendConfig`].
//!
//! [`LlmProvider`]: fera_core::llm::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use fera_core::llm::BoxLlmProvider;
use fera_types::config::BackendConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config;

/// Create a [`BoxLlmProvider`] from a [`BackendConfig`].
///
/// An explicit `base_url` wins. Otherwise the provider name selects a
/// well-known endpoint; unknown names fall back to the OpenAI endpoint.
pub fn create_provider(backend: &BackendConfig, api_key: SecretString) -> BoxLlmProvider {
    let compat = match backend.base_url.as_deref() {
        Some(base_url) => config::custom(&backend.provider_name, base_url, api_key, &backend.model),
        None => match config::well_known(&backend.provider_name, api_key, &backend.model) {
            Ok(compat) => compat,
            Err(api_key) => {
                tracing::warn!(
                    provider = %backend.provider_name,
                    "Unknown provider without base_url, using the OpenAI endpoint"
                );
                config::OpenAiCompatConfig {
                    provider_name: backend.provider_name.clone(),
                    ..config::openai_defaults(api_key, &backend.model)
                }
            }
        },
    };

    tracing::debug!(
        provider = %compat.provider_name,
        base_url = %compat.base_url,
        model = %compat.model,
        "Completion backend configured"
    );
    BoxLlmProvider::new(OpenAiCompatibleProvider::new(compat))
}
