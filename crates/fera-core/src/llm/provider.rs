//! LlmProvider trait definition.
//!
//! This is the backend contract the session controller consumes: one
//! assembled request in, one complete reply out. Streaming, if any, is a
//! presentation concern layered above the core.

use fera_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion backends (OpenAI and compatible APIs).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in fera-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Failures (authentication, network, malformed response) are returned
    /// as-is; implementations must not retry.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
