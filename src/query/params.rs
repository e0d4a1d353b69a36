use super::error::FilterError;
use super::types::{MailboxFilter, SortDirection, SortKey, SortOrder};

/// Raw, transport-shaped query inputs. Everything arrives as strings; this
/// is where bad numbers are rejected, before any filtering or traversal
/// work happens. A validation failure means the filter is never partially
/// applied.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub search: Option<String>,
    pub department: Option<String>,
    pub org_depth_exact: Option<String>,
    pub org_depth_gt: Option<String>,
    pub org_depth_lt: Option<String>,
    pub sub_org_size_min: Option<String>,
    pub sub_org_size_max: Option<String>,
    pub sort_by: Vec<String>,
    pub sort_dir: Vec<String>,
    pub fields: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl QueryParams {
    pub fn into_filter(self) -> Result<MailboxFilter, FilterError> {
        let mut filter = MailboxFilter::default();

        if let Some(search) = self.search {
            filter.search_term = search;
        }

        filter.department = parse_optional("department", self.department)?.unwrap_or(0);
        filter.org_depth_exact = parse_optional("org_depth_exact", self.org_depth_exact)?;
        filter.org_depth_gt = parse_optional("org_depth_gt", self.org_depth_gt)?;
        filter.org_depth_lt = parse_optional("org_depth_lt", self.org_depth_lt)?;
        filter.sub_org_size_min = parse_optional("sub_org_size_min", self.sub_org_size_min)?;
        filter.sub_org_size_max = parse_optional("sub_org_size_max", self.sub_org_size_max)?;

        // Missing directions pad to ascending so every sort key has one
        let mut sort = Vec::with_capacity(self.sort_by.len());
        for (i, key) in self.sort_by.iter().enumerate() {
            let direction = self
                .sort_dir
                .get(i)
                .map(|token| SortDirection::parse(token))
                .unwrap_or(SortDirection::Asc);
            sort.push(SortOrder {
                key: SortKey::parse(key),
                direction,
            });
        }
        filter.sort = sort;

        if let Some(fields) = self.fields {
            filter.fields = fields
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        filter.page = parse_optional("page", self.page)?.unwrap_or(0);
        filter.page_size = parse_optional("page_size", self.page_size)?.unwrap_or(0);

        Ok(filter)
    }
}

fn parse_optional(field: &'static str, raw: Option<String>) -> Result<Option<i32>, FilterError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| FilterError::InvalidNumber {
                field,
                value: raw.clone(),
            }),
        _ => Ok(None),
    }
}
