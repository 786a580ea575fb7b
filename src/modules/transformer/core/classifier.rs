// Multinomial naive Bayes spam filter.
//
// Training counts word occurrences per label over a `TrainingSet`; scoring
// multiplies the label prior with the Laplace-smoothed likelihood of every
// known word. Unknown words contribute a factor of one. Products are kept in
// log space so long messages do not underflow to zero.

use crate::modules::transformer::core::tokenize::words;
use crate::modules::transformer::core::training::{Label, TrainingSet};
use std::collections::HashMap;

pub const DEFAULT_SMOOTHING: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WordCounts {
    spam: u64,
    ham: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub label: Label,
    /// ln P(spam) + sum of ln P(word | spam)
    pub spam_score: f64,
    /// ln P(ham) + sum of ln P(word | ham)
    pub ham_score: f64,
}

#[derive(Debug, Clone)]
pub struct SpamFilter {
    log_prior_spam: f64,
    log_prior_ham: f64,
    vocabulary: HashMap<String, WordCounts>,
    spam_words: u64,
    ham_words: u64,
    alpha: f64,
}

impl SpamFilter {
    pub fn train(training_set: &TrainingSet, alpha: f64) -> Self {
        let mut vocabulary: HashMap<String, WordCounts> = HashMap::new();
        let mut spam_messages = 0u64;
        let mut spam_words = 0u64;
        let mut ham_words = 0u64;

        for message in training_set.messages() {
            if message.label == Label::Spam {
                spam_messages += 1;
            }
            for word in words(&message.text) {
                let counts = vocabulary.entry(word).or_default();
                match message.label {
                    Label::Spam => {
                        counts.spam += 1;
                        spam_words += 1;
                    }
                    Label::Ham => {
                        counts.ham += 1;
                        ham_words += 1;
                    }
                }
            }
        }

        let total = training_set.len() as f64;
        let ham_messages = training_set.len() as u64 - spam_messages;

        tracing::debug!(
            messages = training_set.len(),
            vocabulary = vocabulary.len(),
            spam_words,
            ham_words,
            "trained spam filter"
        );

        Self {
            log_prior_spam: (spam_messages as f64 / total).ln(),
            log_prior_ham: (ham_messages as f64 / total).ln(),
            vocabulary,
            spam_words,
            ham_words,
            alpha,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn filter(&self, message: &str) -> Verdict {
        let v = self.vocabulary.len() as f64;
        let spam_denominator = (self.spam_words as f64 + self.alpha * v).ln();
        let ham_denominator = (self.ham_words as f64 + self.alpha * v).ln();

        let mut spam_score = self.log_prior_spam;
        let mut ham_score = self.log_prior_ham;

        for word in words(message) {
            if let Some(counts) = self.vocabulary.get(&word) {
                spam_score += (counts.spam as f64 + self.alpha).ln() - spam_denominator;
                ham_score += (counts.ham as f64 + self.alpha).ln() - ham_denominator;
            }
        }

        let label = if spam_score > ham_score {
            Label::Spam
        } else {
            Label::Ham
        };

        Verdict {
            label,
            spam_score,
            ham_score,
        }
    }

    pub fn is_ham(&self, message: &str) -> bool {
        self.filter(message).label == Label::Ham
    }
}
