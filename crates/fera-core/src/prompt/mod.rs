//! Prompt construction for the mentor persona.
//!
//! - `InstructionBuilder`: renders the fixed instruction block from the mentorship knowledge base
//! - `assemble`: merges instructions, history, and the new input into one ordered message list

pub mod assembler;
pub mod instructions;

pub use assembler::assemble;
pub use instructions::InstructionBuilder;
