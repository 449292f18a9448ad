use clap::ValueEnum;
use drawcalc_engine::games::{GameTemplate, MAX_TARGET_GROUPS};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::OutputFormat;

pub const CONFIG_ENV: &str = "DRAWCALC_CONFIG";
pub const TEMPLATE_ENV: &str = "DRAWCALC_TEMPLATE";
pub const FORMAT_ENV: &str = "DRAWCALC_FORMAT";
pub const PRECISION_ENV: &str = "DRAWCALC_PRECISION";
pub const MAX_GROUPS_ENV: &str = "DRAWCALC_MAX_GROUPS";

/// Largest number of decimal places accepted for percentages.
pub const MAX_PRECISION: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub template: String,
    pub format: OutputFormat,
    pub precision: u8,
    pub max_groups: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub template: ValueSource,
    pub format: ValueSource,
    pub precision: ValueSource,
    pub max_groups: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            template: ValueSource::Default,
            format: ValueSource::Default,
            precision: ValueSource::Default,
            max_groups: ValueSource::Default,
        }
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
            template: "custom".into(),
            format: OutputFormat::Text,
            precision: 2,
            max_groups: MAX_TARGET_GROUPS,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `DRAWCALC_CONFIG`, then individual environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.template {
            cfg.template = v;
            sources.template = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.precision {
            cfg.precision = v;
            sources.precision = ValueSource::File;
        }
        if let Some(v) = f.max_groups {
            cfg.max_groups = v;
            sources.max_groups = ValueSource::File;
        }
    }

    if let Ok(template) = std::env::var(TEMPLATE_ENV)
        && !template.is_empty()
    {
        cfg.template = template;
        sources.template = ValueSource::Env;
    }
    if let Ok(format) = std::env::var(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = OutputFormat::from_str(&format, true)
            .map_err(|_| ConfigError::Invalid("Invalid format".into()))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(precision) = std::env::var(PRECISION_ENV)
        && !precision.is_empty()
    {
        cfg.precision = precision
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid precision".into()))?;
        sources.precision = ValueSource::Env;
    }
    if let Ok(max_groups) = std::env::var(MAX_GROUPS_ENV)
        && !max_groups.is_empty()
    {
        cfg.max_groups = max_groups
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_groups".into()))?;
        sources.max_groups = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    precision: Option<u8>,
    #[serde(default)]
    max_groups: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if GameTemplate::find(&cfg.template).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown template '{}'",
            cfg.template
        )));
    }
    if cfg.precision > MAX_PRECISION {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: precision must be <={}",
            MAX_PRECISION
        )));
    }
    if cfg.max_groups == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_groups must be >=1".into(),
        ));
    }
    Ok(())
}
