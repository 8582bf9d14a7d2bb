//! Terminal input for the chat loop.
//!
//! Lines are read with `rustyline_async` and classified before the loop sees
//! them: blank lines are dropped here, slash commands are parsed, and only
//! real messages are left for the mentor.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

use super::commands::{self, ChatCommand};

/// What the user did at the prompt.
#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// Text for the mentor, trimmed and never empty.
    Message(String),
    /// A slash command, handled locally.
    Command(ChatCommand),
    /// Only whitespace was entered.
    Blank,
    /// Ctrl+D, or the terminal went away.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

/// Classify one submitted line.
pub fn classify_line(line: &str) -> InputEvent {
    let text = line.trim();
    if text.is_empty() {
        return InputEvent::Blank;
    }
    match commands::parse(text) {
        Some(command) => InputEvent::Command(command),
        None => InputEvent::Message(text.to_string()),
    }
}

/// Prompt reader for one chat session.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Also returns a `SharedWriter` that prints without clobbering the prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    pub async fn next_event(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => classify_line(&line),
            Ok(ReadlineEvent::Eof) | Err(_) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_never_become_messages() {
        assert_eq!(classify_line(""), InputEvent::Blank);
        assert_eq!(classify_line("   \t "), InputEvent::Blank);
    }

    #[test]
    fn test_message_is_trimmed() {
        assert_eq!(
            classify_line("  Como começo minha mentoria?  \n"),
            InputEvent::Message("Como começo minha mentoria?".to_string())
        );
    }

    #[test]
    fn test_slash_commands_are_parsed() {
        assert_eq!(classify_line(" /exit "), InputEvent::Command(ChatCommand::Exit));
        assert_eq!(
            classify_line("/nope"),
            InputEvent::Command(ChatCommand::Unknown("/nope".to_string()))
        );
    }
}
