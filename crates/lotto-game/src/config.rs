//! Game configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lotto_core::{CONFIRM_TOKEN, DEFAULT_SEPARATOR, REJECT_TOKEN};

/// Errors loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Runtime settings for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticket RNG seed for reproducible sessions (None = random)
    pub seed: Option<u64>,

    /// Currency label printed next to prizes
    pub currency: String,

    /// Replay answer that starts another round
    pub confirm_token: String,

    /// Replay answer that ends the game
    pub reject_token: String,

    /// Print each ticket's numbers after purchase
    pub show_tickets: bool,

    /// Separator between winning numbers
    pub separator: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            currency: "KRW".to_string(),
            confirm_token: CONFIRM_TOKEN.to_string(),
            reject_token: REJECT_TOKEN.to_string(),
            show_tickets: true,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file; missing fields take defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.confirm_token.trim().is_empty() || self.reject_token.trim().is_empty() {
            return Err(ConfigError::Invalid("replay tokens must not be empty".into()));
        }
        if self.confirm_token == self.reject_token {
            return Err(ConfigError::Invalid(format!(
                "confirm and reject tokens are both '{}'",
                self.confirm_token
            )));
        }
        if self.separator.is_ascii_digit() || self.separator == '-' || self.separator.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "'{}' cannot separate numbers",
                self.separator
            )));
        }
        Ok(())
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set currency label
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set replay tokens
    pub fn with_replay_tokens(mut self, confirm: impl Into<String>, reject: impl Into<String>) -> Self {
        self.confirm_token = confirm.into();
        self.reject_token = reject.into();
        self
    }

    /// Builder: show or hide ticket listing
    pub fn with_show_tickets(mut self, show: bool) -> Self {
        self.show_tickets = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.confirm_token, "y");
        assert_eq!(config.reject_token, "n");
        assert_eq!(config.separator, ',');
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 42, "currency": "won" }}"#).unwrap();

        let config = GameConfig::load_from(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.currency, "won");
        assert!(config.show_tickets);
    }

    #[test]
    fn test_load_rejects_bad_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "confirm_token": "y", "reject_token": "y" }}"#).unwrap();

        assert!(matches!(
            GameConfig::load_from(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "seed = 42").unwrap();

        assert!(matches!(
            GameConfig::load_from(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GameConfig::load_from(dir.path().join("absent.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_digit_separator_is_invalid() {
        let config = GameConfig {
            separator: '1',
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_currency("USD")
            .with_replay_tokens("yes", "no")
            .with_show_tickets(false);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.currency, "USD");
        assert_eq!(config.confirm_token, "yes");
        assert!(!config.show_tickets);
        assert!(config.validate().is_ok());
    }
}
