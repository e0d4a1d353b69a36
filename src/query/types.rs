use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Mailbox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Identifier,
    UserFullName,
    JobTitle,
    DepartmentId,
    Department,
    OrgDepth,
    SubOrgSize,
}

impl SortKey {
    /// Resolve a client-supplied column name. Unknown names order by full
    /// name, same as the default sort.
    pub fn parse(name: &str) -> Self {
        match name {
            "mailbox_identifier" => Self::Identifier,
            "user_full_name" => Self::UserFullName,
            "job_title" => Self::JobTitle,
            "department_id" => Self::DepartmentId,
            "department" => Self::Department,
            "org_depth" => Self::OrgDepth,
            "sub_org_size" => Self::SubOrgSize,
            _ => Self::UserFullName,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// "desc" in any casing sorts descending; every other token ascends.
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Compound query over the directory: search, exact filters, ordering,
/// pagination, and an optional output projection. All filters that are set
/// must hold (logical AND). `department == 0` means "any department".
#[derive(Debug, Clone, Default)]
pub struct MailboxFilter {
    pub search_term: String,
    pub department: i32,
    pub org_depth_exact: Option<i32>,
    pub org_depth_gt: Option<i32>,
    pub org_depth_lt: Option<i32>,
    pub sub_org_size_min: Option<i32>,
    pub sub_org_size_max: Option<i32>,
    pub sort: Vec<SortOrder>,
    pub fields: Vec<String>,
    pub page: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
    pub total_items: i32,
    pub total_pages: i32,
}

/// Rows of one result page: full records, or maps carrying only the
/// requested fields. The shape is resolved once per request, never
/// mid-pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Records(Vec<Mailbox>),
    Projected(Vec<Map<String, Value>>),
}

impl PageData {
    pub fn len(&self) -> usize {
        match self {
            Self::Records(rows) => rows.len(),
            Self::Projected(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MailboxPage {
    pub data: PageData,
    pub pagination: Pagination,
}
