use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

const BUNDLED_TRAINING_DATA: &str = include_str!("../../../../resources/training_data.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => f.write_str("spam"),
            Label::Ham => f.write_str("ham"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledMessage {
    pub label: Label,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed training data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("training data contains no {0} messages")]
    MissingLabel(Label),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSet {
    messages: Vec<LabeledMessage>,
}

impl TrainingSet {
    /// Both labels must be represented, otherwise the priors are meaningless.
    pub fn new(messages: Vec<LabeledMessage>) -> Result<Self, TrainingError> {
        for label in [Label::Spam, Label::Ham] {
            if !messages.iter().any(|m| m.label == label) {
                return Err(TrainingError::MissingLabel(label));
            }
        }
        Ok(Self { messages })
    }

    pub fn from_json_str(json: &str) -> Result<Self, TrainingError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TrainingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TrainingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn bundled() -> Result<Self, TrainingError> {
        Self::from_json_str(BUNDLED_TRAINING_DATA)
    }

    pub fn messages(&self) -> &[LabeledMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
