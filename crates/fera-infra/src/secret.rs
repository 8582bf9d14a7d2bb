//! Environment variable credential lookup.
//!
//! The backend API key is read from the process environment (after `.env`
//! files have been loaded) and wrapped in a [`SecretString`] immediately, so
//! it never reaches logs or `Debug` output.

use secrecy::SecretString;

use fera_types::error::FunnelError;

/// Read-only credential source backed by environment variables.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `key`. Unset, blank, or non-Unicode values count as missing.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val.trim().to_string())),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Ignoring environment variable with invalid Unicode");
                None
            }
        }
    }

    /// Like [`get`](Self::get), but a missing credential is a configuration error.
    pub fn require(&self, key: &str) -> Result<SecretString, FunnelError> {
        self.get(key).ok_or_else(|| {
            FunnelError::configuration(format!(
                "{key} is not set; export it or add it to a .env file"
            ))
        })
    }

    /// Whether `key` holds a usable value, without exposing it.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
