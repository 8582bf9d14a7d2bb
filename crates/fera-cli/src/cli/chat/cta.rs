//! Call-to-action panel shown once the session reaches its threshold.

use console::style;

use fera_types::mentorship::CallToAction;

const MAX_PANEL_WIDTH: usize = 64;
const MIN_PANEL_WIDTH: usize = 24;

/// Print the call-to-action as a framed panel.
pub fn print_call_to_action(cta: &CallToAction) {
    let width = crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols).saturating_sub(6))
        .unwrap_or(MAX_PANEL_WIDTH)
        .clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);

    let border = "─".repeat(width + 2);
    println!("  {}", style(format!("╭{border}╮")).green());
    for (line, emphasis) in panel_lines(cta, width) {
        let padding = " ".repeat(width.saturating_sub(line.chars().count()));
        let text = match emphasis {
            Emphasis::Headline => style(line).green().bold().to_string(),
            Emphasis::Body => line,
            Emphasis::Link => style(line).cyan().underlined().to_string(),
        };
        println!(
            "  {} {text}{padding} {}",
            style("│").green(),
            style("│").green()
        );
    }
    println!("  {}", style(format!("╰{border}╯")).green());
    println!();
}

/// JSON view used by `--json` output.
pub fn call_to_action_json(cta: &CallToAction) -> serde_json::Value {
    serde_json::json!({
        "headline": cta.headline,
        "pitch": cta.pitch,
        "button_label": cta.button_label,
        "url": cta.url,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Headline,
    Body,
    Link,
}

/// Lay out the panel content, wrapped to `width` columns.
///
/// The URL is never wrapped; terminals need it in one piece to open it.
fn panel_lines(cta: &CallToAction, width: usize) -> Vec<(String, Emphasis)> {
    let mut lines = Vec::new();
    for line in wrap(&cta.headline, width) {
        lines.push((line, Emphasis::Headline));
    }
    if !cta.pitch.trim().is_empty() {
        lines.push((String::new(), Emphasis::Body));
        for line in wrap(&cta.pitch, width) {
            lines.push((line, Emphasis::Body));
        }
    }
    lines.push((String::new(), Emphasis::Body));
    for line in wrap(&format!("👉 {}:", cta.button_label), width) {
        lines.push((line, Emphasis::Body));
    }
    lines.push((cta.url.clone(), Emphasis::Link));
    lines
}

/// Greedy word wrap by character count.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
