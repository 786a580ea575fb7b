use crate::modules::spam::adapters::outbound::message_store_in_memory::InMemoryMessageStore;
use crate::modules::spam::use_cases::submit_spam::handler::SubmitSpamHandler;
use crate::modules::spam::use_cases::transform_to_ham::handler::TransformToHamHandler;
use crate::modules::transformer::core::classifier::{DEFAULT_SMOOTHING, SpamFilter};
use crate::modules::transformer::core::lexicon::JsonLexicon;
use crate::modules::transformer::core::training::TrainingSet;
use crate::modules::transformer::core::transformer::SpamTransformer;
use crate::shared::infrastructure::id_server::sequential::SequentialIdServer;
use crate::shell::state::AppState;
use std::sync::Arc;

/// Transformer trained on the bundled corpus with the bundled lexicon.
pub fn bundled_transformer() -> Arc<SpamTransformer> {
    let filter = SpamFilter::train(&TrainingSet::bundled().unwrap(), DEFAULT_SMOOTHING);
    let lexicon = JsonLexicon::bundled().unwrap();
    Arc::new(SpamTransformer::new(Arc::new(filter), Arc::new(lexicon)))
}

fn state_over(store: InMemoryMessageStore) -> AppState {
    let store = Arc::new(store);
    AppState {
        submit_spam_handler: Arc::new(SubmitSpamHandler::new(
            store.clone(),
            Arc::new(SequentialIdServer::new()),
        )),
        transform_to_ham_handler: Arc::new(TransformToHamHandler::new(
            store,
            bundled_transformer(),
            None,
        )),
    }
}

pub fn make_test_state() -> AppState {
    state_over(InMemoryMessageStore::new())
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryMessageStore::new();
    store.toggle_offline();
    state_over(store)
}
