//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session creation, welcome banner,
//! fixed greeting, input loop with typed-out replies, slash commands, and the
//! call-to-action panel.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use fera_core::session::SessionController;
use fera_types::chat::TurnRole;
use fera_types::error::FunnelError;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::cta::print_call_to_action;
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

const HISTORY_PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut controller = state.build_controller()?;
    let display = &state.config.display;
    let mentor_name = state.config.mentorship.mentor_name.clone();

    print_welcome_banner(
        &state.config.mentorship,
        controller.model(),
        &controller.state().id().to_string(),
        &display.input_hint,
    );

    let renderer = ChatRenderer::new(display.typing_delay_ms);

    // The greeting is fixed text and stays out of the context window
    println!("  {}", style(&mentor_name).cyan().bold());
    renderer.print_reply(&display.greeting).await;
    println!();

    let prompt = format!("  {} ", style("Você >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.next_event().await {
            InputEvent::Blank => continue,
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Command(cmd) => {
                match cmd {
                    ChatCommand::Help => commands::print_help(),
                    ChatCommand::Clear => chat_input.clear(),
                    ChatCommand::Exit => {
                        println!("\n  {}", style("Session ended.").dim());
                        break;
                    }
                    ChatCommand::History => print_history(&controller, &mentor_name),
                    ChatCommand::Status => print_status(&controller),
                    ChatCommand::Cta => {
                        println!();
                        print_call_to_action(controller.call_to_action());
                    }
                    ChatCommand::Unknown(name) => {
                        println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        );
                    }
                }
                continue;
            }
            InputEvent::Message(text) => text,
        };

        let spinner = thinking_spinner();
        let start_time = Instant::now();
        let result = controller.generate_response(&text).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                let response_ms = start_time.elapsed().as_millis() as u64;
                println!("\n  {}", style(&mentor_name).cyan().bold());
                renderer.print_reply(&reply).await;

                let tokens = controller
                    .state()
                    .last_usage()
                    .map(|u| u.output_tokens)
                    .unwrap_or(0);
                renderer.print_stats_footer(tokens, response_ms, controller.model());
                println!();
            }
            Err(FunnelError::Validation(_)) => continue,
            Err(e) => {
                debug!(error = %e, "Reply failed");
                eprintln!(
                    "\n  {} Não consegui responder agora. Tente novamente.",
                    style("!").red().bold()
                );
                eprintln!("  {}", style(e.to_string()).dim());
                eprintln!();
            }
        }

        if controller.should_show_call_to_action() {
            print_call_to_action(controller.call_to_action());
        }
    }

    info!(
        session_id = %controller.state().id(),
        interactions = controller.interaction_count(),
        input_tokens = controller.state().total_usage().input_tokens,
        output_tokens = controller.state().total_usage().output_tokens,
        "Session finished"
    );
    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("pensando...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_history(controller: &SessionController, mentor_name: &str) {
    let history = controller.state().history();
    println!();
    if history.is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for turn in history.as_sequence() {
        let label = match turn.role() {
            TurnRole::User => style("Você".to_string()).green(),
            TurnRole::Assistant => style(mentor_name.to_string()).cyan(),
        };
        println!("  {} {}", label.bold(), preview(turn.text(), HISTORY_PREVIEW_CHARS));
    }
    println!(
        "\n  {}\n",
        style(format!(
            "{} of {} turns kept as context",
            history.len(),
            history.capacity()
        ))
        .dim()
    );
}

fn print_status(controller: &SessionController) {
    let policy = controller.policy();
    let count = controller.interaction_count();
    let usage = controller.state().total_usage();

    println!();
    println!("  {}", style("── Session ──").dim());
    println!("  Id:           {}", style(controller.state().id()).dim());
    println!(
        "  Started:      {}",
        style(controller.state().started_at().format("%Y-%m-%d %H:%M:%S UTC")).dim()
    );
    println!("  Model:        {}", style(controller.model()).dim());
    println!("  Interactions: {}", style(count).bold());
    if controller.should_show_call_to_action() {
        println!("  Next step:    {}", style("call-to-action active").green());
    } else {
        println!(
            "  Next step:    {} more message(s) until the call-to-action",
            style(policy.remaining(count)).yellow()
        );
    }
    println!(
        "  Tokens:       {} ({} in {} {} out)",
        style(usage.total()).bold(),
        style(usage.input_tokens).dim(),
        style("\u{00b7}").dim(),
        style(usage.output_tokens).dim()
    );
    println!();
}

/// Single-line preview of `text`, cut at `max_chars` characters.
fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Olá, tudo bem?", 100), "Olá, tudo bem?");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("linha 1\n\nlinha 2", 100), "linha 1 linha 2");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "ção".repeat(50);
        let out = preview(&text, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
