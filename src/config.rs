use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://iotikaindonesia.com/dipa/api/mhs.php";
pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse configuration file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub endpoint: Url,
    pub count: usize,
    /// Request timeout in seconds. No timeout when absent.
    pub timeout: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            count: DEFAULT_COUNT,
            timeout: None,
        }
    }
}

impl RosterConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Config {
    pub fn load(file_name: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = file_name.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Like [`Config::load`], but use the defaults if the file does not exist.
    pub fn load_or_default(file_name: impl AsRef<Path>) -> Result<Config, ConfigError> {
        match Self::load(file_name) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Config::default())
            }
            result => result,
        }
    }

    pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }
}
