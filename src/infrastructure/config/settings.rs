use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::template::{Delimiters, ParseOptions, TemplateResult, UnterminatedPolicy};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub menus: MenuConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// Support directory holding the menu files
    #[serde(default = "default_menu_directory")]
    pub directory: PathBuf,
    /// File stem of the member context menu
    #[serde(default = "default_users_menu")]
    pub users_menu: String,
    /// File stem of the channel context menu
    #[serde(default = "default_channel_menu")]
    pub channel_menu: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_start_delimiter")]
    pub start_delimiter: String,
    #[serde(default = "default_end_delimiter")]
    pub end_delimiter: String,
    /// What to do with a reference still open at end of line
    #[serde(default)]
    pub unterminated: UnterminatedPolicy,
}

/// Selection snapshot used by the terminal host client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    pub nickname: Option<String>,
    pub channel: Option<String>,
    /// `nick!user@host` masks or bare nicknames
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the human format
    #[serde(default)]
    pub json: bool,
}

fn default_menu_directory() -> PathBuf {
    PathBuf::from("menus")
}

fn default_users_menu() -> String {
    "UsersMenu".to_string()
}

fn default_channel_menu() -> String {
    "ChannelMenu".to_string()
}

fn default_start_delimiter() -> String {
    "${".to_string()
}

fn default_end_delimiter() -> String {
    "}".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("menus.directory", "menus")?
            .set_default("menus.users_menu", "UsersMenu")?
            .set_default("menus.channel_menu", "ChannelMenu")?
            .set_default("template.start_delimiter", "${")?
            .set_default("template.end_delimiter", "}")?
            .set_default("template.unterminated", "drop")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // GRAPHOMENON__CLIENT__NICKNAME, GRAPHOMENON__CLIENT__MEMBERS=a,b, etc.
            .add_source(
                Environment::with_prefix("GRAPHOMENON")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("client.members"),
            );

        builder.build()?.try_deserialize()
    }
}

impl TemplateConfig {
    /// Validated parser options
    pub fn parse_options(&self) -> TemplateResult<ParseOptions> {
        let delimiters = Delimiters::new(&self.start_delimiter, &self.end_delimiter)?;
        Ok(ParseOptions::new(delimiters, self.unterminated))
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            directory: default_menu_directory(),
            users_menu: default_users_menu(),
            channel_menu: default_channel_menu(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            start_delimiter: default_start_delimiter(),
            end_delimiter: default_end_delimiter(),
            unterminated: UnterminatedPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateError;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.menus.directory, PathBuf::from("menus"));
        assert_eq!(settings.menus.users_menu, "UsersMenu");
        assert_eq!(settings.menus.channel_menu, "ChannelMenu");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.client.members.is_empty());
    }

    #[test]
    fn test_default_parse_options() {
        let options = TemplateConfig::default().parse_options().unwrap();
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn test_invalid_delimiters_rejected() {
        let config = TemplateConfig {
            start_delimiter: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.parse_options(),
            Err(TemplateError::InvalidDelimiters(_))
        ));
    }
}
