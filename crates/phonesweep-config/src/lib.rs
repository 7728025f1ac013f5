use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonesweep_core::OutputFormat;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonesweep";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConfig {
    /// Skip column detection and always read this column.
    pub phone_column: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file_name: Option<String>,
}

impl OutputConfig {
    pub fn resolved_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| self.format.default_file_name())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid input.phone_column value: must not be empty")]
    InvalidPhoneColumn,
    #[error("invalid output.file_name value: {0} (expected a .{1} file name)")]
    InvalidOutputFileName(String, &'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<InputFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputFile {
    phone_column: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    format: Option<OutputFormat>,
    file_name: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input) = parsed.input {
        if let Some(column) = input.phone_column {
            let column = column.trim();
            if column.is_empty() {
                return Err(ConfigError::InvalidPhoneColumn);
            }
            config.input.phone_column = Some(column.to_string());
        }
    }

    if let Some(output) = parsed.output {
        if let Some(format) = output.format {
            config.output.format = format;
        }
        if let Some(file_name) = output.file_name {
            validate_file_name(&file_name, config.output.format)?;
            config.output.file_name = Some(file_name);
        }
    }

    Ok(config)
}

/// Output file names are bare names with the format's extension.
pub fn validate_file_name(file_name: &str, format: OutputFormat) -> Result<()> {
    let bare = Path::new(file_name)
        .file_name()
        .is_some_and(|name| name == file_name);
    if !bare || !format.matches_file_name(file_name) {
        return Err(ConfigError::InvalidOutputFileName(
            file_name.to_string(),
            format.extension(),
        ));
    }
    Ok(())
}
