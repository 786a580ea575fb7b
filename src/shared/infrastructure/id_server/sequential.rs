use crate::shared::core::primitives::MessageId;
use crate::shared::infrastructure::id_server::IdServer;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out 1, 2, 3, ... for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SequentialIdServer {
    last: AtomicU64,
}

impl SequentialIdServer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdServer for SequentialIdServer {
    fn next_id(&self) -> MessageId {
        MessageId::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
