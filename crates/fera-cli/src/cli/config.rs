//! `fera config`: print the effective configuration.
//!
//! The credential itself is never printed, only whether it is set.

use anyhow::Result;
use console::style;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let config_path = state
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());
    let validation = state.config.validate().err().map(|e| e.to_string());

    if json {
        let output = serde_json::json!({
            "config_path": config_path,
            "credential": {
                "env": state.config.backend.api_key_env,
                "set": state.credential_set(),
            },
            "valid": validation.is_none(),
            "error": validation,
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let credential = if state.credential_set() {
        style("set").green()
    } else {
        style("not set").red()
    };

    println!();
    println!(
        "  {}  {}",
        style("Config file:").bold(),
        style(config_path.as_deref().unwrap_or("(none)")).dim()
    );
    println!(
        "  {}   {} {}",
        style("Credential:").bold(),
        style(&state.config.backend.api_key_env).cyan(),
        credential
    );
    if let Some(err) = &validation {
        println!("  {}      {}", style("Status:").bold(), style(err).red());
    }
    println!("  {}", style("---").dim());
    println!();
    print!("{}", toml::to_string_pretty(&state.config)?);
    Ok(())
}
