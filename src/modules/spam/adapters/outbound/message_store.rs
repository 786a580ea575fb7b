use crate::modules::spam::core::message::SpamMessage;
use crate::shared::core::primitives::MessageId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageStoreError {
    #[error("message {0} already exists")]
    Duplicate(MessageId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: SpamMessage) -> Result<(), MessageStoreError>;
    async fn get(&self, id: MessageId) -> Result<Option<SpamMessage>, MessageStoreError>;
    /// Ascending.
    async fn ids(&self) -> Result<Vec<MessageId>, MessageStoreError>;
}
