use crate::modules::transformer::core::classifier::SpamFilter;
use crate::modules::transformer::core::lexicon::SynonymLexicon;
use crate::modules::transformer::core::similar::similar_messages;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transformation {
    pub content: String,
    pub success: bool,
}

/// Rewrites spam with synonyms until the filter lets it through as ham.
pub struct SpamTransformer {
    filter: Arc<SpamFilter>,
    lexicon: Arc<dyn SynonymLexicon>,
}

impl SpamTransformer {
    pub fn new(filter: Arc<SpamFilter>, lexicon: Arc<dyn SynonymLexicon>) -> Self {
        Self { filter, lexicon }
    }

    pub fn filter(&self) -> &SpamFilter {
        &self.filter
    }

    pub fn transform(&self, spam: &str, max_synonyms: Option<usize>) -> Transformation {
        if self.filter.is_ham(spam) {
            return Transformation {
                content: spam.to_string(),
                success: true,
            };
        }

        let candidates = similar_messages(spam, self.lexicon.as_ref(), max_synonyms);
        tracing::debug!(candidates = candidates.len(), "searching for ham rewrite");

        match candidates
            .into_iter()
            .find(|candidate| self.filter.is_ham(candidate))
        {
            Some(ham) => Transformation {
                content: ham,
                success: true,
            },
            None => Transformation {
                content: spam.to_string(),
                success: false,
            },
        }
    }
}
