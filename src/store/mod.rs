pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Mailbox;

pub use memory::InMemoryMailboxStore;

/// Errors from a mailbox store backend. These are transient infrastructure
/// failures from the caller's point of view and are never retried here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Mailbox not found: {0}")]
    NotFound(String),

    #[error("Store read failed: {0}")]
    ReadFailed(String),

    #[error("Store write failed: {0}")]
    WriteFailed(String),
}

/// Recomputed metrics for one mailbox, ready for writeback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgMetricsUpdate {
    pub identifier: String,
    pub org_depth: i32,
    pub sub_org_size: i32,
}

/// Storage seam for the directory.
///
/// Implementations supply full scans and point lookups over mailbox
/// records. `apply_metrics` must be all-or-nothing: a failed write leaves
/// every stored depth and size exactly as it was.
#[async_trait]
pub trait MailboxStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Mailbox>, StoreError>;

    async fn get_by_identifier(&self, identifier: &str) -> Result<Option<Mailbox>, StoreError>;

    async fn apply_metrics(&self, updates: &[OrgMetricsUpdate]) -> Result<(), StoreError>;
}
