//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use chrono::TimeDelta;
use serde::Deserialize;

use super::types::{Res, Void};

/// Upper bound for the dedup window (one day).
const MAX_DEDUP_WINDOW_SECS: f64 = 86_400.0;

/// Default prefix that marks a command message.
fn default_command_prefix() -> String {
    "!".to_string()
}

/// Default duplicate-suppression window, in seconds.
fn default_dedup_window_secs() -> f64 {
    5.0
}

/// Default owner named by the `info` command.
fn default_owner_name() -> String {
    "SunTime".to_string()
}

/// Default activity announced when the bot comes online.
fn default_presence_activity() -> String {
    "con SunTime 😎".to_string()
}

fn default_bot_user_id() -> String {
    "saludo-bot".to_string()
}

fn default_console_channel_id() -> String {
    "console".to_string()
}

fn default_console_author_id() -> String {
    "console-user".to_string()
}

fn default_console_author_name() -> String {
    "amigo".to_string()
}

/// Configuration for the saludo-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Prefix that marks a command message (`COMMAND_PREFIX`).
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Duplicate-suppression window in seconds (`DEDUP_WINDOW_SECS`).
    /// Cache entries are purged once they are older than twice this value.
    #[serde(default = "default_dedup_window_secs")]
    pub dedup_window_secs: f64,
    /// Owner named by the `info` command (`OWNER_NAME`).
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    /// Activity announced when the bot comes online (`PRESENCE_ACTIVITY`).
    #[serde(default = "default_presence_activity")]
    pub presence_activity: String,
    /// The bot's own user ID (`BOT_USER_ID`).
    #[serde(default = "default_bot_user_id")]
    pub bot_user_id: String,
    /// Channel ID assigned to console input (`CONSOLE_CHANNEL_ID`).
    #[serde(default = "default_console_channel_id")]
    pub console_channel_id: String,
    /// Author ID assigned to console input (`CONSOLE_AUTHOR_ID`).
    #[serde(default = "default_console_author_id")]
    pub console_author_id: String,
    /// Author display name assigned to console input (`CONSOLE_AUTHOR_NAME`).
    #[serde(default = "default_console_author_name")]
    pub console_author_name: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            dedup_window_secs: default_dedup_window_secs(),
            owner_name: default_owner_name(),
            presence_activity: default_presence_activity(),
            bot_user_id: default_bot_user_id(),
            console_channel_id: default_console_channel_id(),
            console_author_id: default_console_author_id(),
            console_author_name: default_console_author_name(),
        }
    }
}

impl ConfigInner {
    /// Check the loaded values for consistency.
    pub fn validate(&self) -> Void {
        if self.command_prefix.is_empty() {
            return Err(anyhow::anyhow!("Command prefix must not be empty."));
        }

        if !self.dedup_window_secs.is_finite() || self.dedup_window_secs <= 0.0 || self.dedup_window_secs > MAX_DEDUP_WINDOW_SECS {
            return Err(anyhow::anyhow!("Dedup window must be between 0 and {} seconds.", MAX_DEDUP_WINDOW_SECS));
        }

        if self.bot_user_id == self.console_author_id {
            return Err(anyhow::anyhow!("Console author ID must differ from the bot user ID."));
        }

        Ok(())
    }

    /// The duplicate-suppression window, at millisecond resolution.
    pub fn dedup_window(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.dedup_window_secs * 1000.0).round() as i64)
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("SALUDO_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfigInner::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.dedup_window(), TimeDelta::seconds(5));
    }

    #[test]
    fn test_fractional_window() {
        let config = ConfigInner { dedup_window_secs: 2.5, ..Default::default() };

        assert_eq!(config.dedup_window(), TimeDelta::milliseconds(2500));
    }

    #[test]
    fn test_rejects_out_of_range_window() {
        let zero = ConfigInner { dedup_window_secs: 0.0, ..Default::default() };
        let negative = ConfigInner { dedup_window_secs: -1.0, ..Default::default() };
        let nan = ConfigInner { dedup_window_secs: f64::NAN, ..Default::default() };
        let huge = ConfigInner { dedup_window_secs: 1e12, ..Default::default() };

        assert!(huge.validate().is_err());
        assert!(zero.validate().is_err());
        assert!(negative.validate().is_err());
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let config = ConfigInner { command_prefix: String::new(), ..Default::default() };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_console_author_posing_as_bot() {
        let config = ConfigInner {
            console_author_id: "saludo-bot".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
