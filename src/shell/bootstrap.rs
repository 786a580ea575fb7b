use crate::modules::spam::adapters::outbound::message_store_in_memory::InMemoryMessageStore;
use crate::modules::spam::use_cases::submit_spam::handler::SubmitSpamHandler;
use crate::modules::spam::use_cases::transform_to_ham::handler::TransformToHamHandler;
use crate::modules::transformer::core::classifier::SpamFilter;
use crate::modules::transformer::core::lexicon::{JsonLexicon, LexiconError};
use crate::modules::transformer::core::training::{TrainingError, TrainingSet};
use crate::modules::transformer::core::transformer::SpamTransformer;
use crate::shared::infrastructure::config::Config;
use crate::shared::infrastructure::id_server::sequential::SequentialIdServer;
use crate::shell::state::AppState;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

pub fn load_training_set(config: &Config) -> Result<TrainingSet, TrainingError> {
    match &config.training_data_path {
        Some(path) => TrainingSet::from_path(path),
        None => TrainingSet::bundled(),
    }
}

pub fn load_lexicon(config: &Config) -> Result<JsonLexicon, LexiconError> {
    match &config.lexicon_path {
        Some(path) => JsonLexicon::from_path(path),
        None => JsonLexicon::bundled(),
    }
}

pub fn build_transformer(config: &Config) -> Result<SpamTransformer, BootstrapError> {
    let training_set = load_training_set(config)?;
    let lexicon = load_lexicon(config)?;
    let filter = SpamFilter::train(&training_set, config.smoothing);

    tracing::info!(
        training_messages = training_set.len(),
        vocabulary = filter.vocabulary_size(),
        lexicon_entries = lexicon.len(),
        "spam transformer ready"
    );

    Ok(SpamTransformer::new(Arc::new(filter), Arc::new(lexicon)))
}

pub fn build_state(config: &Config) -> Result<AppState, BootstrapError> {
    let transformer = Arc::new(build_transformer(config)?);
    let store = Arc::new(InMemoryMessageStore::new());
    let id_server = Arc::new(SequentialIdServer::new());

    Ok(AppState {
        submit_spam_handler: Arc::new(SubmitSpamHandler::new(store.clone(), id_server)),
        transform_to_ham_handler: Arc::new(TransformToHamHandler::new(
            store,
            transformer,
            config.max_synonyms,
        )),
    })
}
