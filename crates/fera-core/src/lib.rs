//! Domain logic for the FERA Mentor funnel: rolling history, prompt
//! assembly, the completion backend contract, and the session controller.
//!
//! Depends only on `fera-types`; concrete backends live in `fera-infra`.

pub mod history;
pub mod llm;
pub mod prompt;
pub mod session;
