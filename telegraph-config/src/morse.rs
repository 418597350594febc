//! Transliterator settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MorseConfig {
    /// Plain text file to read.
    #[validate(custom(function = validation::validate_path))]
    pub input: PathBuf,

    /// Destination of the Morse document; overwritten on every run.
    #[validate(custom(function = validation::validate_path))]
    pub output: PathBuf,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lorem.txt"),
            output: PathBuf::from("lorem_morse.txt"),
        }
    }
}
