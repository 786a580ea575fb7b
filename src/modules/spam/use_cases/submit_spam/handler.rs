use crate::modules::spam::adapters::outbound::message_store::{MessageStore, MessageStoreError};
use crate::modules::spam::core::message::SpamMessage;
use crate::modules::spam::use_cases::submit_spam::command::SubmitSpam;
use crate::shared::infrastructure::id_server::IdServer;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitSpamError {
    #[error("Content field is not specified")]
    MissingContent,

    #[error(transparent)]
    Store(#[from] MessageStoreError),
}

pub struct SubmitSpamHandler<TStore, TIdServer>
where
    TStore: MessageStore + 'static,
    TIdServer: IdServer + 'static,
{
    store: Arc<TStore>,
    id_server: Arc<TIdServer>,
}

impl<TStore, TIdServer> SubmitSpamHandler<TStore, TIdServer>
where
    TStore: MessageStore + 'static,
    TIdServer: IdServer + 'static,
{
    pub fn new(store: Arc<TStore>, id_server: Arc<TIdServer>) -> Self {
        Self { store, id_server }
    }

    pub async fn handle(&self, command: SubmitSpam) -> Result<SpamMessage, SubmitSpamError> {
        let content = command.content.ok_or(SubmitSpamError::MissingContent)?;

        let message = SpamMessage {
            id: self.id_server.next_id(),
            content,
            received_at: command.received_at,
        };
        self.store.insert(message.clone()).await?;

        tracing::info!(id = %message.id, "spam submitted");
        Ok(message)
    }
}
