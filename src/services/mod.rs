pub mod mailbox_service;

pub use mailbox_service::{DirectoryError, MailboxService, OrgMetricsSummary};
