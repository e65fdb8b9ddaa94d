use serde::{Deserialize, Serialize};
use std::fs;

/// Resolved CLI configuration.
///
/// Values are layered: built-in defaults, then a TOML file named by the
/// `TRIPOKER_CONFIG` environment variable, then per-field environment
/// overrides (`TRIPOKER_STRATEGY`, `TRIPOKER_PRETTY`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Strategy used by the decide command when `--strategy` is absent
    pub strategy: String,
    /// Pretty-print JSON output of the decide command
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub strategy: ValueSource,
    pub pretty: ValueSource,
}

impl Default for ValueSource {
    fn default() -> Self {
        ValueSource::Default
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: "baseline".into(),
            pretty: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

/// Partial configuration as read from a TOML file; absent keys keep the
/// previous layer's value.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    strategy: Option<String>,
    pretty: Option<bool>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TRIPOKER_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.pretty {
            cfg.pretty = v;
            sources.pretty = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("TRIPOKER_STRATEGY") {
        if v.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "TRIPOKER_STRATEGY must not be empty".into(),
            ));
        }
        cfg.strategy = v;
        sources.strategy = ValueSource::Env;
    }

    if let Ok(v) = std::env::var("TRIPOKER_PRETTY") {
        cfg.pretty = match v.as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "TRIPOKER_PRETTY must be a boolean, got {:?}",
                    other
                )))
            }
        };
        sources.pretty = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
