use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store_file")]
    pub store_file: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_lunch_minutes")]
    pub lunch_deduction_minutes: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_store_file() -> String {
    Config::store_path_default().to_string_lossy().to_string()
}
fn default_hourly_rate() -> f64 {
    30.0
}
fn default_lunch_minutes() -> i64 {
    60
}
fn default_currency() -> String {
    "R$".to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            hourly_rate: default_hourly_rate(),
            lunch_deduction_minutes: default_lunch_minutes(),
            currency: default_currency(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pontolog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pontolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pontolog.conf")
    }

    /// Default location of the record store
    pub fn store_path_default() -> PathBuf {
        Self::config_dir().join("registro_ponto.csv")
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store_file)
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Resolve a `--store` argument: `~` expanded, relative paths anchored
    /// to the working directory.
    pub fn resolve_store_path(name: &str) -> AppResult<PathBuf> {
        let p = expand_tilde(name);
        if p.is_absolute() {
            Ok(p)
        } else {
            Ok(env::current_dir()?.join(p))
        }
    }

    /// Lunch deduction expressed in hours.
    pub fn lunch_deduction_hours(&self) -> f64 {
        self.lunch_deduction_minutes as f64 / 60.0
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        if cfg.hourly_rate < 0.0 {
            return Err(AppError::Config(format!(
                "hourly_rate must not be negative (got {})",
                cfg.hourly_rate
            )));
        }
        if cfg.lunch_deduction_minutes < 0 {
            return Err(AppError::Config(format!(
                "lunch_deduction_minutes must not be negative (got {})",
                cfg.lunch_deduction_minutes
            )));
        }

        Ok(cfg)
    }

    /// Initialize the configuration file and return the resulting config.
    ///
    /// A custom store path is resolved with [`Config::resolve_store_path`],
    /// like every other command does. In test mode the config file is not written.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let store_path = match custom_store {
            Some(name) => Self::resolve_store_path(name)?,
            None => Self::store_path_default(),
        };

        let config = Config {
            store_file: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
