use serde::Serialize;

use crate::auth::VisibilityScope;
use crate::config;
use crate::hierarchy;
use crate::model::Mailbox;
use crate::query::{self, FilterError, MailboxFilter, MailboxPage};
use crate::store::{MailboxStore, OrgMetricsUpdate, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Mailbox not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result summary of one metrics recalculation pass.
#[derive(Debug, Clone, Serialize)]
pub struct OrgMetricsSummary {
    pub mailboxes_updated: usize,
    pub cycles_detected: Vec<String>,
}

/// The exposed directory surface: listing, point lookups, sub-org queries,
/// and the metrics recalculation pass. Every operation works on a snapshot
/// pulled from the store at its start; nothing is shared between calls.
pub struct MailboxService<S> {
    store: S,
}

impl<S: MailboxStore> MailboxService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Unrestricted listing over the whole directory.
    pub async fn get_mailboxes(
        &self,
        filter: MailboxFilter,
    ) -> Result<MailboxPage, DirectoryError> {
        let mailboxes = self.store.get_all().await?;
        Ok(query::execute(mailboxes, &filter))
    }

    pub async fn get_mailbox(&self, identifier: &str) -> Result<Mailbox, DirectoryError> {
        self.store
            .get_by_identifier(identifier)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(identifier.to_string()))
    }

    /// List a manager's sub-org: the manager plus every transitive report.
    /// The candidate set is narrowed before filtering so pagination totals
    /// only count sub-org members.
    pub async fn get_mailboxes_in_sub_org(
        &self,
        manager_identifier: &str,
        filter: MailboxFilter,
    ) -> Result<MailboxPage, DirectoryError> {
        let manager = self.get_mailbox(manager_identifier).await?;
        let mailboxes = self.store.get_all().await?;

        let mut candidates = vec![manager];
        candidates.extend(hierarchy::descendants(manager_identifier, &mailboxes));

        Ok(query::execute(candidates, &filter))
    }

    /// Sub-org membership check; a manager is always in their own sub-org.
    pub async fn is_mailbox_in_sub_org(
        &self,
        manager_identifier: &str,
        mailbox_identifier: &str,
    ) -> Result<bool, DirectoryError> {
        if manager_identifier == mailbox_identifier {
            return Ok(true);
        }

        let mailboxes = self.store.get_all().await?;
        Ok(hierarchy::is_descendant(
            manager_identifier,
            mailbox_identifier,
            &mailboxes,
        ))
    }

    /// Recompute org depth and sub-org size for every mailbox and write the
    /// results back in one atomic batch.
    pub async fn calculate_org_metrics(&self) -> Result<OrgMetricsSummary, DirectoryError> {
        let mailboxes = self.store.get_all().await?;
        let metrics = hierarchy::recalculate(&mailboxes);

        if !metrics.cycles.is_empty() && config::config().hierarchy.warn_on_cycles {
            tracing::warn!(
                "Manager chains contain cycles, depths were truncated: {:?}",
                metrics.cycles
            );
        }

        let updates: Vec<OrgMetricsUpdate> = metrics
            .mailboxes
            .iter()
            .map(|mailbox| OrgMetricsUpdate {
                identifier: mailbox.identifier.clone(),
                org_depth: mailbox.org_depth,
                sub_org_size: mailbox.sub_org_size,
            })
            .collect();

        self.store.apply_metrics(&updates).await?;

        tracing::info!("Recalculated org metrics for {} mailboxes", updates.len());

        Ok(OrgMetricsSummary {
            mailboxes_updated: updates.len(),
            cycles_detected: metrics.cycles,
        })
    }

    /// Scope-aware listing: an unrestricted caller sees the whole forest, a
    /// sub-org caller sees their root and its reports.
    pub async fn list_visible(
        &self,
        scope: &VisibilityScope,
        filter: MailboxFilter,
    ) -> Result<MailboxPage, DirectoryError> {
        let mailboxes = self.store.get_all().await?;
        let candidates = scope.visible_candidates(&mailboxes);
        Ok(query::execute(candidates, &filter))
    }

    /// Scope-aware point lookup. A missing mailbox surfaces as NotFound
    /// even when the caller could not have seen it.
    pub async fn get_visible(
        &self,
        scope: &VisibilityScope,
        identifier: &str,
    ) -> Result<Mailbox, DirectoryError> {
        let mailbox = self.get_mailbox(identifier).await?;

        match scope {
            VisibilityScope::Unrestricted => Ok(mailbox),
            VisibilityScope::SubOrg(_) => {
                let mailboxes = self.store.get_all().await?;
                if scope.can_view(identifier, &mailboxes) {
                    Ok(mailbox)
                } else {
                    tracing::debug!("Scope rejected lookup of {}", identifier);
                    Err(DirectoryError::AccessDenied(identifier.to_string()))
                }
            }
        }
    }
}
