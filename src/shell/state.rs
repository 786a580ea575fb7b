use crate::modules::spam::adapters::outbound::message_store_in_memory::InMemoryMessageStore;
use crate::modules::spam::use_cases::submit_spam::handler::SubmitSpamHandler;
use crate::modules::spam::use_cases::transform_to_ham::handler::TransformToHamHandler;
use crate::shared::infrastructure::id_server::sequential::SequentialIdServer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_spam_handler: Arc<SubmitSpamHandler<InMemoryMessageStore, SequentialIdServer>>,
    pub transform_to_ham_handler: Arc<TransformToHamHandler<InMemoryMessageStore>>,
}
