use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::SpanPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for [`UnicodeFilter`](crate::UnicodeFilter).
///
/// # Example
/// ```
/// use gsmfilter::config::FilterConfig;
/// let config = FilterConfig::default();
/// assert!(!config.strip_non_decodable_only);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Only replace characters the alphabet cannot encode.
    pub strip_non_decodable_only: bool,
    /// How annotations follow substituted text.
    pub span_policy: SpanPolicy,
}

#[derive(Deserialize)]
struct ConfigFile {
    filter: Option<FilterSection>,
}

/// Every key is optional; missing ones keep their defaults.
#[derive(Deserialize)]
struct FilterSection {
    strip_non_decodable_only: Option<bool>,
    span_policy: Option<SpanPolicy>,
}

impl FilterConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = FilterConfig::default();
        if let Some(section) = file.filter {
            if let Some(v) = section.strip_non_decodable_only {
                config.strip_non_decodable_only = v;
            }
            if let Some(v) = section.span_policy {
                config.span_policy = v;
            }
        }
        Ok(config)
    }
}

/// Load a TOML file with a `[filter]` table and merge it over the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<FilterConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    let config = FilterConfig::from_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!("loaded {:?} from {}", config, path.display());
    Ok(config)
}
