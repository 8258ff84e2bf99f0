use crate::console::VerbosityLevel;
use crate::sun_times::{DEFAULT_API_URL, SunriseSunsetConfig};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub mod error;

pub use error::{ConfigError, ConfigResult};

/// Settings read from `config.toml`. Every field is optional; command-line
/// flags override whatever is set here.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub verbosity: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Loads from `explicit` when given (which must exist), otherwise from the
    /// default location if a file is there. A missing default file yields the
    /// default config.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(ref verbosity) = self.verbosity
            && verbosity.parse::<VerbosityLevel>().is_err()
        {
            return Err(ConfigError::InvalidValue {
                field: "verbosity".to_string(),
                value: verbosity.clone(),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Get the configured verbosity level, falling back to Normal if not set
    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(VerbosityLevel::Normal)
    }

    /// Client settings, with `api_url_override` taking precedence over the
    /// configured URL.
    pub fn client_config(&self, api_url_override: Option<&str>) -> SunriseSunsetConfig {
        let base_url = api_url_override
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        SunriseSunsetConfig {
            base_url,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("daypart").join("config.toml"))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
