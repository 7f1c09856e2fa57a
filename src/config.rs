use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_SOURCE_URL: &str = "https://github.com/trending?since=daily";
pub const DEFAULT_OUTPUT_PATH: &str = "report.html";
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source_url: Url,
    pub output_path: PathBuf,
    pub default_description: String,
    pub timeout_secs: u64,
    /// Escape `& < > " '` in extracted text before embedding it in the report.
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: Url::parse(DEFAULT_SOURCE_URL).expect("default source url is valid"),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            escape_html: true,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(filename: P) -> anyhow::Result<Self> {
        let filename = filename.as_ref();
        let content = fs::read_to_string(filename)
            .with_context(|| format!("failed to read config file {}", filename.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", filename.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        anyhow::ensure!(config.timeout_secs > 0, "timeout_secs must be greater than 0");
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
