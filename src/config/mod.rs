use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{availability::OpeningHours, catalog::Catalog, errors::BookingError};

pub const HOME_ENV: &str = "BOOKING_WIZARD_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub opening_hours: OpeningHours,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "Kč".into(),
            opening_hours: OpeningHours::default(),
            catalog_file: None,
            plain_output: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.currency.trim().is_empty() {
            return Err(BookingError::InvalidConfig(
                "currency label cannot be empty".into(),
            ));
        }
        self.opening_hours.validate()
    }

    /// The configured catalog file, or the built-in barbershop catalog.
    pub fn catalog(&self) -> Result<Catalog, BookingError> {
        match &self.catalog_file {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::barbershop()),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BookingError> {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BookingError> {
        let config_root = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_root)?;
        Ok(Self {
            path: config_root.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, BookingError> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), BookingError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".booking_wizard")
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BookingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
