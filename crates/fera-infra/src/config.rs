//! Configuration loading for FERA Mentor.
//!
//! Reads `config.toml` (by default from `~/.fera/`) into a [`FunnelConfig`],
//! applies command-line/environment overrides, and loads `.env` files.
//!
//! Precedence: flag or env override > config file > built-in defaults.

use std::path::{Path, PathBuf};

use fera_types::config::FunnelConfig;
use fera_types::error::FunnelError;

/// Directory name under the user's home holding config and `.env`.
const DATA_DIR_NAME: &str = ".fera";

/// `~/.fera`, if a home directory can be determined.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// `~/.fera/config.toml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.toml"))
}

/// Load the configuration file at `path`.
///
/// - `None` or a missing file returns [`FunnelConfig::default()`] when
///   `required` is false, and a configuration error otherwise.
/// - An unreadable or malformed file is a configuration error.
pub async fn load_funnel_config(
    path: Option<&Path>,
    required: bool,
) -> Result<FunnelConfig, FunnelError> {
    let Some(path) = path else {
        tracing::debug!("No config path available, using defaults");
        return Ok(FunnelConfig::default());
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return Ok(FunnelConfig::default());
        }
        Err(err) => {
            return Err(FunnelError::configuration(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };

    let config = toml::from_str::<FunnelConfig>(&content).map_err(|err| {
        FunnelError::configuration(format!("failed to parse {}: {err}", path.display()))
    })?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Values from command-line flags (or their environment fallbacks) that
/// replace the corresponding config file entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub base_url: Option<String>,
    pub history_window: Option<usize>,
    pub cta_threshold: Option<u32>,
    pub typing_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut FunnelConfig) {
        if let Some(model) = &self.model {
            config.backend.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.backend.temperature = temperature;
        }
        if let Some(base_url) = &self.base_url {
            config.backend.base_url = Some(base_url.clone());
        }
        if let Some(window) = self.history_window {
            config.session.history_window = window;
        }
        if let Some(threshold) = self.cta_threshold {
            config.session.cta_threshold = threshold;
        }
        if let Some(delay) = self.typing_delay_ms {
            config.display.typing_delay_ms = delay;
        }
    }
}

/// Load `.env` files into the process environment.
///
/// `./.env` is read first, then `~/.fera/.env`. Variables that are already
/// set are never overwritten, so the shell wins over both files and the
/// project file wins over the global one.
///
/// Runs before logging is initialized; parse failures are returned for the
/// caller to report.
pub fn load_dotenv() -> Vec<(PathBuf, dotenvy::Error)> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = data_dir() {
        candidates.push(dir.join(".env"));
    }

    candidates
        .into_iter()
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(err) => Some((path, err)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_funnel_config(Some(&tmp.path().join("config.toml")), false)
            .await
            .unwrap();
        assert_eq!(config, FunnelConfig::default());
    }

    #[tokio::test]
    async fn load_no_path_returns_default() {
        let config = load_funnel_config(None, false).await.unwrap();
        assert_eq!(config, FunnelConfig::default());
    }

    #[tokio::test]
    async fn load_missing_required_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_funnel_config(Some(&tmp.path().join("nope.toml")), true)
            .await
            .unwrap_err();
        assert!(matches!(err, FunnelError::Configuration(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[tokio::test]
    async fn load_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[backend]
model = "gpt-4o"
temperature = 0.3

[session]
cta_threshold = 3

[mentorship]
mentor_name = "Coach Bot"
"#,
        )
        .await
        .unwrap();

        let config = load_funnel_config(Some(&config_path), true).await.unwrap();
        assert_eq!(config.backend.model, "gpt-4o");
        assert!((config.backend.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.session.cta_threshold, 3);
        assert_eq!(config.session.history_window, 5);
        assert_eq!(config.mentorship.mentor_name, "Coach Bot");
        assert!(!config.mentorship.topics.is_empty());
    }

    #[tokio::test]
    async fn load_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not valid toml {{{{")
            .await
            .unwrap();

        let err = load_funnel_config(Some(&config_path), false)
            .await
            .unwrap_err();
        assert!(matches!(err, FunnelError::Configuration(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[tokio::test]
    async fn load_wrong_type_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "[session]\nhistory_window = \"five\"\n")
            .await
            .unwrap();

        assert!(load_funnel_config(Some(&config_path), false).await.is_err());
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let mut config = FunnelConfig::default();
        let overrides = ConfigOverrides {
            model: Some("gpt-4.1-mini".to_string()),
            cta_threshold: Some(2),
            typing_delay_ms: Some(0),
            ..ConfigOverrides::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.backend.model, "gpt-4.1-mini");
        assert_eq!(config.session.cta_threshold, 2);
        assert_eq!(config.display.typing_delay_ms, 0);
        assert!((config.backend.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.session.history_window, 5);
        assert!(config.backend.base_url.is_none());
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = FunnelConfig::default();
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config, FunnelConfig::default());
    }

    #[test]
    fn default_paths_live_under_data_dir() {
        if let (Some(dir), Some(path)) = (data_dir(), default_config_path()) {
            assert!(dir.ends_with(".fera"));
            assert_eq!(path, dir.join("config.toml"));
        }
    }
}
