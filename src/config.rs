use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CHAT_DEPLOYMENT: &str = "gpt-4o";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_endpoint: String,
    pub search_admin_key: String,
    pub search_index_name: String,
    pub chat_endpoint: String,
    pub chat_api_key: String,
    pub chat_deployment: String,
    pub port: u16,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            search_endpoint: require("SEARCH_SERVICE_ENDPOINT")?,
            search_admin_key: require("SEARCH_ADMIN_KEY")?,
            search_index_name: require("SEARCH_INDEX_NAME")?,
            chat_endpoint: require("OPENAI_GPT_ENDPOINT")?,
            chat_api_key: require("OPENAI_GPT_API_KEY")?,
            chat_deployment: env::var("CHAT_DEPLOYMENT")
                .unwrap_or_else(|_| DEFAULT_CHAT_DEPLOYMENT.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|val| val.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
