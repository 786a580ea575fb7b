pub mod sequential;

use crate::shared::core::primitives::MessageId;

pub trait IdServer: Send + Sync {
    fn next_id(&self) -> MessageId;
}
