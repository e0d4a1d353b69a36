use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::Mailbox;

use super::{MailboxStore, OrgMetricsUpdate, StoreError};

/// Mailbox store backed by a process-local map. Serves as the test double
/// and as the backend for embedding the engine without an external
/// database.
#[derive(Default)]
pub struct InMemoryMailboxStore {
    mailboxes: RwLock<HashMap<String, Mailbox>>,
}

impl InMemoryMailboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mailboxes(mailboxes: Vec<Mailbox>) -> Self {
        let map = mailboxes
            .into_iter()
            .map(|mailbox| (mailbox.identifier.clone(), mailbox))
            .collect();
        Self {
            mailboxes: RwLock::new(map),
        }
    }

    pub async fn insert(&self, mailbox: Mailbox) {
        self.mailboxes
            .write()
            .await
            .insert(mailbox.identifier.clone(), mailbox);
    }

    pub async fn len(&self) -> usize {
        self.mailboxes.read().await.len()
    }
}

#[async_trait]
impl MailboxStore for InMemoryMailboxStore {
    async fn get_all(&self) -> Result<Vec<Mailbox>, StoreError> {
        Ok(self.mailboxes.read().await.values().cloned().collect())
    }

    async fn get_by_identifier(&self, identifier: &str) -> Result<Option<Mailbox>, StoreError> {
        Ok(self.mailboxes.read().await.get(identifier).cloned())
    }

    async fn apply_metrics(&self, updates: &[OrgMetricsUpdate]) -> Result<(), StoreError> {
        let mut mailboxes = self.mailboxes.write().await;

        // Validate the whole batch before touching anything; the write is
        // all-or-nothing.
        for update in updates {
            if !mailboxes.contains_key(&update.identifier) {
                return Err(StoreError::NotFound(update.identifier.clone()));
            }
        }

        for update in updates {
            if let Some(mailbox) = mailboxes.get_mut(&update.identifier) {
                mailbox.org_depth = update.org_depth;
                mailbox.sub_org_size = update.sub_org_size;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn apply_metrics_rejects_unknown_ids_without_partial_writes() {
        let store = InMemoryMailboxStore::with_mailboxes(vec![testing::mailbox(
            "a@falafel.org",
            "Ada Alpha",
            None,
        )]);

        let updates = vec![
            OrgMetricsUpdate {
                identifier: "a@falafel.org".to_string(),
                org_depth: 4,
                sub_org_size: 9,
            },
            OrgMetricsUpdate {
                identifier: "ghost@falafel.org".to_string(),
                org_depth: 1,
                sub_org_size: 1,
            },
        ];

        let result = store.apply_metrics(&updates).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        // The valid half of the batch must not have been applied
        let stored = store.get_by_identifier("a@falafel.org").await.unwrap().unwrap();
        assert_eq!(stored.org_depth, 0);
        assert_eq!(stored.sub_org_size, 0);
    }
}
