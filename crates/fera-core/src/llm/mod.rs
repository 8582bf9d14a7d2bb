//! Completion backend abstractions for FERA Mentor.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;

#[cfg(test)]
pub(crate) mod mock;

pub use box_provider::BoxLlmProvider;
pub use provider::LlmProvider;
