use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://api:4545";

/// Top-level config (dateline.toml + DATELINE_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatelineConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub api: FormatApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiscordConfig {
    #[serde(default)]
    pub bot_token: String,
}

/// Formatting API endpoint and credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Bearer credential sent on text-formatting calls.
    pub api_key: Option<String>,
}

impl Default for FormatApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            api_key: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl DatelineConfig {
    /// Load config from a TOML file with DATELINE_* env var overrides.
    ///
    /// Bare `DISCORD_TOKEN`, `API_URL` and `OPENROUTER_API_KEY` env vars are
    /// honoured as fallbacks so container deployments can skip the TOML file
    /// entirely.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let mut config: DatelineConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("DATELINE_").split("_"))
            .extract()
            .map_err(|e| crate::error::DatelineError::Config(e.to_string()))?;

        if config.discord.bot_token.is_empty() {
            if let Ok(token) = std::env::var("DISCORD_TOKEN") {
                config.discord.bot_token = token;
            }
        }
        if let Ok(url) = std::env::var("API_URL") {
            config.api.base_url = url;
        }
        if config.api.api_key.is_none() {
            config.api.api_key = std::env::var("OPENROUTER_API_KEY").ok();
        }

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.dateline/dateline.toml", home)
}
