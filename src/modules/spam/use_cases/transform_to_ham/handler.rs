use crate::modules::spam::adapters::outbound::message_store::{MessageStore, MessageStoreError};
use crate::modules::transformer::core::transformer::{SpamTransformer, Transformation};
use crate::shared::core::primitives::MessageId;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformToHamError {
    #[error("Ham {0} doesn't exist")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] MessageStoreError),

    #[error("transform worker failed: {0}")]
    Worker(String),
}

pub struct TransformToHamHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    store: Arc<TStore>,
    transformer: Arc<SpamTransformer>,
    max_synonyms: Option<usize>,
}

impl<TStore> TransformToHamHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        transformer: Arc<SpamTransformer>,
        max_synonyms: Option<usize>,
    ) -> Self {
        Self {
            store,
            transformer,
            max_synonyms,
        }
    }

    /// `ham_id` is taken raw from the caller; anything that is not a known id
    /// is reported as missing.
    pub async fn handle(&self, ham_id: &str) -> Result<Transformation, TransformToHamError> {
        let not_found = || TransformToHamError::NotFound(ham_id.to_string());

        let id: MessageId = ham_id.parse().map_err(|_| not_found())?;
        let Some(message) = self.store.get(id).await? else {
            tracing::warn!(%id, "ham requested for unknown spam");
            return Err(not_found());
        };

        // CPU bound; keep it off the async workers
        let transformer = self.transformer.clone();
        let max_synonyms = self.max_synonyms;
        let transformation = tokio::task::spawn_blocking(move || {
            transformer.transform(&message.content, max_synonyms)
        })
        .await
        .map_err(|err| TransformToHamError::Worker(err.to_string()))?;
        tracing::info!(%id, success = transformation.success, "spam transformed");
        Ok(transformation)
    }
}
