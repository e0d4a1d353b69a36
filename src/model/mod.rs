use serde::{Deserialize, Serialize};

/// One organizational directory entry.
///
/// `department` carries the resolved department name; the store denormalizes
/// it onto every record it returns. `org_depth` and `sub_org_size` are
/// derived values, owned by the hierarchy recalculation pass and never set
/// by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mailbox {
    #[serde(rename = "mailbox_identifier")]
    pub identifier: String,
    pub user_full_name: String,
    pub job_title: String,
    pub department_id: i32,
    pub department: String,
    #[serde(rename = "manager_mailbox_identifier", default)]
    pub manager_identifier: Option<String>,
    #[serde(default)]
    pub org_depth: i32,
    #[serde(default)]
    pub sub_org_size: i32,
}

impl Mailbox {
    /// Manager reference with the empty string normalized away: a mailbox
    /// with no manager, or an empty manager value, is a tree root.
    pub fn manager(&self) -> Option<&str> {
        self.manager_identifier
            .as_deref()
            .filter(|manager| !manager.is_empty())
    }
}
