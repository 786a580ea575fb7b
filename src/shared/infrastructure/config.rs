// Process configuration read from the environment.
//
// Every key is optional. `.env` files are loaded by the binaries before this
// runs, so values there behave exactly like exported variables.

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const HOST: &str = "DNASB_HOST";
pub const PORT: &str = "DNASB_PORT";
pub const TRAINING_DATA: &str = "DNASB_TRAINING_DATA";
pub const LEXICON: &str = "DNASB_LEXICON";
pub const MAX_SYNONYMS: &str = "DNASB_MAX_SYNONYMS";
pub const SMOOTHING: &str = "DNASB_SMOOTHING";
pub const TEST_DATA: &str = "DNASB_TEST_DATA";
pub const EVALUATION_OUTPUT: &str = "DNASB_EVALUATION_OUTPUT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub training_data_path: Option<PathBuf>,
    pub lexicon_path: Option<PathBuf>,
    pub max_synonyms: Option<usize>,
    pub smoothing: f64,
    pub test_data_path: Option<PathBuf>,
    pub evaluation_output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            training_data_path: None,
            lexicon_path: None,
            max_synonyms: None,
            smoothing: 1.0,
            test_data_path: None,
            evaluation_output_path: PathBuf::from("successful_transforms.txt"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let smoothing = parsed(&lookup, SMOOTHING)?.unwrap_or(defaults.smoothing);
        if !(smoothing.is_finite() && smoothing > 0.0) {
            return Err(ConfigError::Invalid {
                key: SMOOTHING,
                value: smoothing.to_string(),
            });
        }

        Ok(Self {
            host: non_empty(&lookup, HOST).unwrap_or(defaults.host),
            port: parsed(&lookup, PORT)?.unwrap_or(defaults.port),
            training_data_path: non_empty(&lookup, TRAINING_DATA).map(PathBuf::from),
            lexicon_path: non_empty(&lookup, LEXICON).map(PathBuf::from),
            max_synonyms: parsed(&lookup, MAX_SYNONYMS)?,
            smoothing,
            test_data_path: non_empty(&lookup, TEST_DATA).map(PathBuf::from),
            evaluation_output_path: non_empty(&lookup, EVALUATION_OUTPUT)
                .map(PathBuf::from)
                .unwrap_or(defaults.evaluation_output_path),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    non_empty(lookup, key)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
