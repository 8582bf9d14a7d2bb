//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and are handled locally; they never reach the
//! model and do not count as interactions.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Show the turns currently in the context window.
    History,
    /// Show interaction count, call-to-action progress, and token usage.
    Status,
    /// Show the call-to-action now.
    Cta,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/status" => Some(ChatCommand::Status),
        "/cta" | "/whatsapp" => Some(ChatCommand::Cta),
        _ => Some(ChatCommand::Unknown(cmd)),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}    Show this help message", style("/help").cyan());
    println!("  {}   Clear the screen", style("/clear").cyan());
    println!("  {}    End the session", style("/exit").cyan());
    println!("  {} Show the conversation context", style("/history").cyan());
    println!("  {}  Show session progress and token usage", style("/status").cyan());
    println!("  {}     Talk to a specialist now", style("/cta").cyan());
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("  /STATUS  "), Some(ChatCommand::Status));
        assert_eq!(parse("/cta"), Some(ChatCommand::Cta));
        assert_eq!(parse("/whatsapp"), Some(ChatCommand::Cta));
    }

    #[test]
    fn test_parse_ignores_arguments() {
        assert_eq!(parse("/status now"), Some(ChatCommand::Status));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("Como crio minha mentoria?"), None);
        assert_eq!(parse("a/b"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo bar"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
