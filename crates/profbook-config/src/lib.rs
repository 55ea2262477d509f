use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use profbook_core::{ModuleRegistry, RegistryError};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "profbook";
const CONFIG_FILENAME: &str = "config.toml";
const CONTACTS_FILENAME: &str = "contacts.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub contacts_file: Option<PathBuf>,
    pub registry: ModuleRegistry,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts_file: None,
            registry: ModuleRegistry::builtin(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid contacts_file value: {0}")]
    InvalidContactsFile(PathBuf),
    #[error("invalid module catalog: {0}")]
    Registry(#[from] RegistryError),
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

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    contacts_file: Option<PathBuf>,
    modules: Option<ModulesFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModulesFile {
    include_builtin: Option<bool>,
    #[serde(default)]
    extra: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleEntry {
    code: String,
    title: String,
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
            let base = xdg_dir("XDG_CONFIG_HOME", &[".config"], ConfigError::InvalidConfigPath)?;
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Picks the contacts file: the explicit path, then the config value, then
/// the data directory default.
pub fn resolve_contacts_path(custom: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = custom.or_else(|| config.contacts_file.clone()) {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidContactsFile(path));
        }
        return Ok(path);
    }
    let base = xdg_dir(
        "XDG_DATA_HOME",
        &[".local", "share"],
        ConfigError::InvalidDataPath,
    )?;
    Ok(base.join(APP_DIR).join(CONTACTS_FILENAME))
}

fn xdg_dir(
    var: &str,
    home_fallback: &[&str],
    invalid: fn(PathBuf) -> ConfigError,
) -> Result<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(invalid(path));
        }
        return Ok(path);
    }
    let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
    Ok(home_fallback
        .iter()
        .fold(home, |path, segment| path.join(segment)))
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

    if let Some(path) = parsed.contacts_file {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidContactsFile(path));
        }
        config.contacts_file = Some(path);
    }

    if let Some(modules) = parsed.modules {
        let base = if modules.include_builtin.unwrap_or(true) {
            ModuleRegistry::builtin()
        } else {
            ModuleRegistry::default()
        };
        let extra = modules
            .extra
            .into_iter()
            .map(|entry| (entry.code.trim().to_string(), entry.title.trim().to_string()));
        config.registry = base.with_entries(extra)?;
    }

    Ok(config)
}
