use crate::modules::transformer::core::tokenize::normalize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

const BUNDLED_LEXICON: &str = include_str!("../../../../resources/lexicon.json");

/// Ordered synonym lemmas for a word. The first entry is the preferred one.
pub trait SynonymLexicon: Send + Sync {
    fn synonyms(&self, word: &str) -> &[String];
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Lexicon backed by a JSON object of `word -> [lemma, ...]`.
#[derive(Debug, Clone, Default)]
pub struct JsonLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl JsonLexicon {
    /// Words that normalize to the same key are merged in key order, keeping
    /// the first occurrence of each lemma.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (word, lemmas) in raw {
            let Some(key) = normalize(&word) else {
                continue;
            };
            let merged = entries.entry(key).or_default();
            for lemma in lemmas {
                let lemma = lemma.replace('_', " ");
                if !lemma.trim().is_empty() && !merged.contains(&lemma) {
                    merged.push(lemma);
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_json_str(BUNDLED_LEXICON)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynonymLexicon for JsonLexicon {
    fn synonyms(&self, word: &str) -> &[String] {
        normalize(word)
            .and_then(|key| self.entries.get(&key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
