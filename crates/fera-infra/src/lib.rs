//! Infrastructure layer for FERA Mentor.
//!
//! Implements the completion backend trait defined in `fera-core` on top of
//! the OpenAI chat completions API, and loads configuration and credentials
//! from files and the environment.

pub mod config;
pub mod llm;
pub mod secret;
