//! Shared domain types for FERA Mentor.
//!
//! This crate contains the domain types used across the funnel: LLM messages
//! and requests, conversation turns, configuration, the mentorship knowledge
//! base, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod mentorship;
