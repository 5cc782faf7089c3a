pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, validate_positive_number,
    Validate,
};
use std::path::{Path, PathBuf};

pub use cli::CliArgs;
pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_DATA_FILE: &str = "submissions.json";
pub const DEFAULT_STATIC_DIR: &str = "./public";
pub const DEFAULT_BODY_LIMIT: usize = 1_000_000;

/// Fully resolved settings: defaults, then the TOML file, then flags and env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub data_file: String,
    pub static_dir: PathBuf,
    pub body_limit: usize,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            body_limit: DEFAULT_BODY_LIMIT,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::merge(file, args))
    }

    pub fn merge(file: TomlConfig, args: &CliArgs) -> Self {
        let defaults = Self::default();

        Self {
            host: args
                .host
                .clone()
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port: args.port.or(file.server.port).unwrap_or(defaults.port),
            data_dir: args
                .data_dir
                .clone()
                .or(file.storage.data_dir)
                .unwrap_or(defaults.data_dir),
            data_file: args
                .data_file
                .clone()
                .or(file.storage.file_name)
                .unwrap_or(defaults.data_file),
            static_dir: args
                .static_dir
                .clone()
                .or(file.server.static_dir)
                .unwrap_or(defaults.static_dir),
            body_limit: args
                .body_limit
                .or(file.limits.body_limit)
                .unwrap_or(defaults.body_limit),
            verbose: args.verbose || file.logging.verbose.unwrap_or(defaults.verbose),
            json_logs: args.json_logs || file.logging.json.unwrap_or(defaults.json_logs),
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    fn body_limit(&self) -> usize {
        self.body_limit
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_path("data_dir", &self.data_dir.to_string_lossy())?;
        validate_file_name("data_file", &self.data_file)?;
        validate_path("static_dir", &self.static_dir.to_string_lossy())?;
        validate_positive_number("body_limit", self.body_limit, 1)?;
        Ok(())
    }
}
