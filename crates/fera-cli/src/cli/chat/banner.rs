//! Welcome banner display for chat sessions.

use console::style;

use fera_types::mentorship::MentorshipInfo;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the mentor, the guide it is based on, the model, and a short
/// session id, followed by the input hint.
pub fn print_welcome_banner(info: &MentorshipInfo, model: &str, session_id: &str, hint: &str) {
    println!();
    println!("  📘 {}", style(&info.mentor_name).cyan().bold());
    println!(
        "  {}",
        style(format!("'{}' · {}", info.title, info.author)).dim()
    );
    println!();
    println!("  {}    {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(short_id(session_id)).dim()
    );
    println!();
    if !hint.trim().is_empty() {
        println!("  {}", style(hint).italic());
    }
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Last eight characters of a session id (UUID v7 ids share a timestamp prefix).
fn short_id(session_id: &str) -> &str {
    let len = session_id.len();
    if len <= 8 || !session_id.is_char_boundary(len - 8) {
        session_id
    } else {
        &session_id[len - 8..]
    }
}
