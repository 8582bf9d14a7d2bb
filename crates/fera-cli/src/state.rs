//! Application state shared by command handlers.
//!
//! Resolves the effective configuration (file + overrides) once per process
//! and builds the session controller on demand.

use std::path::PathBuf;

use anyhow::Context;

use fera_core::session::SessionController;
use fera_infra::config::{ConfigOverrides, default_config_path, load_funnel_config};
use fera_infra::llm::create_provider;
use fera_infra::secret::EnvSecretProvider;
use fera_types::config::FunnelConfig;

use crate::cli::Cli;

pub struct AppState {
    pub config: FunnelConfig,
    /// Where the config was looked up; `None` when no home directory exists.
    pub config_path: Option<PathBuf>,
    pub secrets: EnvSecretProvider,
}

impl AppState {
    /// Load the config file and apply flag/env overrides.
    ///
    /// An explicit `--config` path must exist; the default path may be absent.
    pub async fn load(cli: &Cli) -> anyhow::Result<Self> {
        let (config_path, required) = match &cli.config {
            Some(path) => (Some(path.clone()), true),
            None => (default_config_path(), false),
        };

        let mut config = load_funnel_config(config_path.as_deref(), required).await?;
        ConfigOverrides::from(&cli.overrides).apply(&mut config);

        Ok(Self {
            config,
            config_path,
            secrets: EnvSecretProvider::new(),
        })
    }

    /// Resolve the credential and create a fresh session.
    pub fn build_controller(&self) -> anyhow::Result<SessionController> {
        self.config
            .validate()
            .context("invalid configuration")?;

        let api_key = self.secrets.require(&self.config.backend.api_key_env)?;
        let provider = create_provider(&self.config.backend, api_key);
        let controller = SessionController::new(&self.config, provider)?;
        Ok(controller)
    }

    /// Whether the backend credential is available, without reading it out.
    pub fn credential_set(&self) -> bool {
        self.secrets.is_set(&self.config.backend.api_key_env)
    }
}
