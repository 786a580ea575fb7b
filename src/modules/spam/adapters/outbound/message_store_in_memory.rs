// In memory implementation of the MessageStore port.
//
// Backs the running service and every handler test. The offline switch lets
// tests exercise the infrastructure failure paths.

use crate::modules::spam::adapters::outbound::message_store::{MessageStore, MessageStoreError};
use crate::modules::spam::core::message::SpamMessage;
use crate::shared::core::primitives::MessageId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMessageStore {
    inner: RwLock<BTreeMap<MessageId, SpamMessage>>,
    is_offline: bool,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), MessageStoreError> {
        if self.is_offline {
            return Err(MessageStoreError::Backend("Message store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn insert(&self, message: SpamMessage) -> Result<(), MessageStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.entry(message.id) {
            Entry::Occupied(_) => Err(MessageStoreError::Duplicate(message.id)),
            Entry::Vacant(slot) => {
                slot.insert(message);
                Ok(())
            }
        }
    }

    async fn get(&self, id: MessageId) -> Result<Option<SpamMessage>, MessageStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn ids(&self) -> Result<Vec<MessageId>, MessageStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.keys().copied().collect())
    }
}

#[cfg(test)]
mod in_memory_message_store_tests {
    use super::*;
    use rstest::rstest;

    fn message(id: u64, content: &str) -> SpamMessage {
        SpamMessage {
            id: MessageId::new(id),
            content: content.to_string(),
            received_at: 1_700_000_000_000,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_insert_and_get_a_message() {
        let store = InMemoryMessageStore::new();
        store.insert(message(1, "win cash")).await.unwrap();

        let loaded = store.get(MessageId::new(1)).await.unwrap();
        assert_eq!(loaded, Some(message(1, "win cash")));
        assert_eq!(store.get(MessageId::new(2)).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_ids_in_ascending_order() {
        let store = InMemoryMessageStore::new();
        for id in [3, 1, 2] {
            store.insert(message(id, "spam")).await.unwrap();
        }
        let ids: Vec<u64> = store.ids().await.unwrap().iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_overwrite_a_message() {
        let store = InMemoryMessageStore::new();
        store.insert(message(1, "first")).await.unwrap();

        let result = store.insert(message(1, "second")).await;
        assert_eq!(result, Err(MessageStoreError::Duplicate(MessageId::new(1))));
        assert_eq!(
            store.get(MessageId::new(1)).await.unwrap().map(|m| m.content),
            Some("first".to_string())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline() {
        let mut store = InMemoryMessageStore::new();
        store.toggle_offline();
        let offline = MessageStoreError::Backend("Message store offline".into());

        assert_eq!(store.insert(message(1, "spam")).await, Err(offline.clone()));
        assert_eq!(store.get(MessageId::new(1)).await, Err(offline.clone()));
        assert_eq!(store.ids().await, Err(offline));
    }
}
