use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Thread, ThreadId, UserId};

/// A thread after the persistence layer has taken ownership of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredThread {
    pub id: ThreadId,
    pub user_id: Option<UserId>,
    pub thread: Thread,
    pub created_at: DateTime<Utc>,
}

impl StoredThread {
    pub fn new(user_id: Option<UserId>, thread: Thread) -> Self {
        Self {
            id: ThreadId::new(),
            user_id,
            thread,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: Option<&UserId>) -> bool {
        self.user_id.as_ref() == user_id
    }
}
