//! Interactive terminal chat for FERA Mentor.
//!
//! Implements the full chat loop: welcome banner, fixed greeting, typed-out
//! markdown replies, slash commands, and the call-to-action panel. Entry
//! point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod cta;
pub mod input;
pub mod loop_runner;
pub mod renderer;
