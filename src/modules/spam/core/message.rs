use crate::shared::core::primitives::MessageId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamMessage {
    pub id: MessageId,
    pub content: String,
    pub received_at: i64,
}
