//! `fera ask`: one message, one reply, no interactive session.

use anyhow::Result;
use console::style;

use crate::state::AppState;

use super::chat::cta::{call_to_action_json, print_call_to_action};
use super::chat::renderer::ChatRenderer;

/// Send `message` in a fresh session and print the reply.
///
/// The call-to-action is included only when the configured threshold is
/// reached by this single turn.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let mut controller = state.build_controller()?;
    let reply = controller.generate_response(message).await?;
    let show_cta = controller.should_show_call_to_action();

    if json {
        let usage = controller.state().total_usage();
        let output = serde_json::json!({
            "session_id": controller.state().id().to_string(),
            "model": controller.model(),
            "reply": reply,
            "interaction_count": controller.interaction_count(),
            "usage": {
                "input_tokens": usage.input_tokens,
                "output_tokens": usage.output_tokens,
            },
            "call_to_action": show_cta.then(|| call_to_action_json(controller.call_to_action())),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&state.config.mentorship.mentor_name).cyan().bold());
    ChatRenderer::new(0).print_reply(&reply).await;
    println!();

    if show_cta {
        print_call_to_action(controller.call_to_action());
    }
    Ok(())
}
