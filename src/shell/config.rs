// Runtime configuration read from the environment.
//
// Variables
// - OPS_EVENTS_OUTPUT: "text" (default) or "json".
// - OPS_EVENTS_LOG: default tracing filter when RUST_LOG is unset. Defaults to "info".

use crate::modules::events::adapters::outbound::stream_sink::RenderFormat;
use thiserror::Error;

pub const OUTPUT_VAR: &str = "OPS_EVENTS_OUTPUT";
pub const LOG_VAR: &str = "OPS_EVENTS_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be \"text\" or \"json\", got {value:?}")]
    InvalidOutput { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: RenderFormat,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: RenderFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let output = match lookup(OUTPUT_VAR) {
            None => defaults.output,
            Some(value) => parse_output(&value)?,
        };
        let log_filter = lookup(LOG_VAR).unwrap_or(defaults.log_filter);
        Ok(Self { output, log_filter })
    }
}

fn parse_output(value: &str) -> Result<RenderFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(RenderFormat::Text),
        "json" => Ok(RenderFormat::JsonLines),
        _ => Err(ConfigError::InvalidOutput {
            var: OUTPUT_VAR,
            value: value.to_string(),
        }),
    }
}
