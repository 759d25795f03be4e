use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DEFAULT_CONFIG_PATH: &str = "src/default_config.toml";
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prefix substituted for root-relative `href="/` and `src="/` links
    pub base_path: String,
    pub paths: PathsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            paths: PathsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Copied as-is into the output directory
    pub static_dir: PathBuf,
    /// Markdown sources, one page per `.md` file
    pub content_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("docs"),
        }
    }
}

impl Config {
    /// Defaults embedded at compile time. build.rs checks their shape, so an
    /// error here means the schema and `default_config.toml` disagree.
    pub fn compiled_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::compiled_default(),
            Err(e) => return Err(Error::io(path)(e)),
        };
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
