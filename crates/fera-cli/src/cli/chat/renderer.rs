//! Terminal markdown rendering with a typewriter effect.
//!
//! `ChatRenderer` formats replies with `termimad`, then prints them one
//! visible character at a time. ANSI escape sequences are emitted together
//! with the character they style, so the delay only applies to what the
//! reader sees.

use std::io::Write;
use std::time::Duration;

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Terminal markdown renderer for mentor replies.
pub struct ChatRenderer {
    skin: MadSkin,
    typing_delay: Duration,
}

impl ChatRenderer {
    pub fn new(typing_delay_ms: u64) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            typing_delay: Duration::from_millis(typing_delay_ms),
        }
    }

    /// Render markdown to an ANSI-styled string.
    pub fn render(&self, markdown: &str) -> String {
        self.skin.term_text(markdown).to_string()
    }

    /// Print the rendered reply, typing it out when a delay is configured.
    pub async fn print_reply(&self, markdown: &str) {
        let rendered = self.render(markdown);
        let rendered = rendered.trim_end();

        if self.typing_delay.is_zero() {
            println!("{}", indent(rendered));
            return;
        }

        let mut stdout = std::io::stdout();
        for unit in typewriter_units(&indent(rendered)) {
            let _ = stdout.write_all(unit.as_bytes());
            let _ = stdout.flush();
            tokio::time::sleep(self.typing_delay).await;
        }
        println!();
    }

    /// Print the stats footer after a reply.
    ///
    /// Format: "| {tokens} tokens . {time}s . {model}"
    pub fn print_stats_footer(&self, tokens: u32, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        let footer = format!(
            "\n  {} {} tokens {} {:.1}s {} {}",
            console::style("|").dim(),
            console::style(tokens).dim(),
            console::style("\u{00b7}").dim(),
            console::style(seconds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(model).dim(),
        );
        println!("{footer}");
    }
}

/// Indent every line by two spaces to line up with the rest of the chat.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split styled text into print units, each ending in one visible character.
///
/// Escape sequences (`ESC [ ... final-byte`) are attached to the following
/// visible character; trailing escapes form a final unit of their own.
fn typewriter_units(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                if let Some(bracket) = chars.next() {
                    current.push(bracket);
                }
                for next in chars.by_ref() {
                    current.push(next);
                    if ('\x40'..='\x7e').contains(&next) {
                        break;
                    }
                }
            }
            continue;
        }
        units.push(std::mem::take(&mut current));
    }

    if !current.is_empty() {
        units.push(current);
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_plain_text() {
        assert_eq!(typewriter_units("Olá"), vec!["O", "l", "á"]);
        assert!(typewriter_units("").is_empty());
    }

    #[test]
    fn test_units_attach_escapes_to_next_char() {
        let units = typewriter_units("\x1b[1mA\x1b[0mB");
        assert_eq!(units, vec!["\x1b[1mA", "\x1b[0mB"]);
    }

    #[test]
    fn test_units_keep_trailing_escape() {
        let units = typewriter_units("A\x1b[0m");
        assert_eq!(units, vec!["A", "\x1b[0m"]);
        assert_eq!(units.concat(), "A\x1b[0m");
    }

    #[test]
    fn test_units_reassemble_rendered_markdown() {
        let renderer = ChatRenderer::new(0);
        let rendered = renderer.render("**Passo 1**: encontre seu *nicho*");
        assert_eq!(typewriter_units(&rendered).concat(), rendered);
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb"), "  a\n  b");
    }

    #[tokio::test]
    async fn test_print_reply_without_delay() {
        let renderer = ChatRenderer::new(0);
        renderer.print_reply("Oi!").await;
    }
}
