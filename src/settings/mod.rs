//! Saved generation settings.

mod file;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use passgen::{CharClasses, DEFAULT_LENGTH, GenerationRequest};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory for this user")]
    NoConfigDir,
    #[error("settings file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&file::path()?)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &file::path()?)
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            upper: self.upper,
            lower: self.lower,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    pub fn set_classes(&mut self, classes: CharClasses) {
        self.upper = classes.upper;
        self.lower = classes.lower;
        self.numbers = classes.numbers;
        self.symbols = classes.symbols;
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            classes: self.classes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            upper: true,
            lower: true,
            numbers: true,
            symbols: true,
        }
    }
}
