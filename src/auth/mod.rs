use serde::{Deserialize, Serialize};

use crate::hierarchy;
use crate::model::Mailbox;

/// How much of the directory a caller may see. Credential handling lives in
/// the transport layer; this module only evaluates the scope it decided on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityScope {
    /// Whole-forest visibility, unfiltered by org position.
    Unrestricted,
    /// Visibility limited to one root mailbox and its transitive reports.
    SubOrg(String),
}

impl VisibilityScope {
    /// Whether `identifier` is visible under this scope. A sub-org scope
    /// always sees its own root.
    pub fn can_view(&self, identifier: &str, mailboxes: &[Mailbox]) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::SubOrg(root) => hierarchy::is_descendant(root, identifier, mailboxes),
        }
    }

    /// Narrow a snapshot to what this scope may list. Narrowing happens
    /// before filtering and pagination so page totals only ever count
    /// authorized records.
    pub fn visible_candidates(&self, mailboxes: &[Mailbox]) -> Vec<Mailbox> {
        match self {
            Self::Unrestricted => mailboxes.to_vec(),
            Self::SubOrg(root) => {
                let mut visible = Vec::new();
                if let Some(mailbox) = mailboxes.iter().find(|m| &m.identifier == root) {
                    visible.push(mailbox.clone());
                }
                visible.extend(hierarchy::descendants(root, mailboxes));
                visible
            }
        }
    }
}
