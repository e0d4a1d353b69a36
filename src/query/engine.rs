use std::cmp::Ordering;

use crate::config;
use crate::model::Mailbox;

use super::fields;
use super::types::{
    MailboxFilter, MailboxPage, PageData, Pagination, SortDirection, SortKey, SortOrder,
};

/// Run the full query pipeline over one candidate set: search, exact
/// filters, count, sort, paginate, project.
///
/// Candidates may be the whole directory or a pre-narrowed sub-org; the
/// pipeline is the same either way and carries no authorization logic. The
/// match count is captured before pagination so totals always describe the
/// filtered set, not the page.
pub fn execute(candidates: Vec<Mailbox>, filter: &MailboxFilter) -> MailboxPage {
    let candidate_count = candidates.len();

    let mut matched: Vec<Mailbox> = candidates
        .into_iter()
        .filter(|mailbox| matches(mailbox, filter))
        .collect();

    let total_items = matched.len() as i32;

    sort(&mut matched, &filter.sort);

    let (page, page_size) = normalize_paging(filter.page, filter.page_size);
    let (start, end) = page_window(matched.len(), page, page_size);
    let paged = &matched[start..end];

    if config::config().query.debug_logging {
        tracing::debug!(
            "query matched {} of {} candidates, returning {} rows (page {}, size {})",
            total_items,
            candidate_count,
            paged.len(),
            page,
            page_size
        );
    }

    let data = if filter.fields.is_empty() {
        PageData::Records(paged.to_vec())
    } else {
        PageData::Projected(fields::project(paged, &filter.fields))
    };

    MailboxPage {
        data,
        pagination: Pagination {
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        },
    }
}

fn matches(mailbox: &Mailbox, filter: &MailboxFilter) -> bool {
    if !filter.search_term.is_empty() {
        let term = filter.search_term.to_lowercase();
        let hit = mailbox.user_full_name.to_lowercase().contains(&term)
            || mailbox.job_title.to_lowercase().contains(&term)
            || mailbox.department.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    if filter.department != 0 && mailbox.department_id != filter.department {
        return false;
    }

    if let Some(depth) = filter.org_depth_exact {
        if mailbox.org_depth != depth {
            return false;
        }
    }
    if let Some(depth) = filter.org_depth_gt {
        if mailbox.org_depth <= depth {
            return false;
        }
    }
    if let Some(depth) = filter.org_depth_lt {
        if mailbox.org_depth >= depth {
            return false;
        }
    }

    if let Some(min) = filter.sub_org_size_min {
        if mailbox.sub_org_size < min {
            return false;
        }
    }
    if let Some(max) = filter.sub_org_size_max {
        if mailbox.sub_org_size > max {
            return false;
        }
    }

    true
}

/// Stable multi-key sort in the supplied priority order; no keys means
/// full-name ascending.
fn sort(mailboxes: &mut [Mailbox], orders: &[SortOrder]) {
    if orders.is_empty() {
        mailboxes.sort_by(|a, b| a.user_full_name.cmp(&b.user_full_name));
        return;
    }

    mailboxes.sort_by(|a, b| {
        for order in orders {
            let ordering = match order.direction {
                SortDirection::Asc => compare(a, b, order.key),
                SortDirection::Desc => compare(a, b, order.key).reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

fn compare(a: &Mailbox, b: &Mailbox, key: SortKey) -> Ordering {
    match key {
        SortKey::Identifier => a.identifier.cmp(&b.identifier),
        SortKey::UserFullName => a.user_full_name.cmp(&b.user_full_name),
        SortKey::JobTitle => a.job_title.cmp(&b.job_title),
        SortKey::DepartmentId => a.department_id.cmp(&b.department_id),
        SortKey::Department => a.department.cmp(&b.department),
        SortKey::OrgDepth => a.org_depth.cmp(&b.org_depth),
        SortKey::SubOrgSize => a.sub_org_size.cmp(&b.sub_org_size),
    }
}

/// Pages are 1-based; non-positive values fall back to page 1 and the
/// configured default size. Sizes above the configured maximum are capped.
fn normalize_paging(page: i32, page_size: i32) -> (i32, i32) {
    let query = &config::config().query;

    let page = if page <= 0 { 1 } else { page };
    let mut page_size = if page_size <= 0 {
        query.default_page_size.max(1)
    } else {
        page_size
    };

    if let Some(max) = query.max_page_size {
        if page_size > max {
            if query.debug_logging {
                tracing::warn!("Page size {} exceeds max {}, capping to max", page_size, max);
            }
            page_size = max;
        }
    }

    (page, page_size)
}

/// Slice bounds for the requested page, clamped to the matched set. A page
/// past the end is an empty window, not an error.
fn page_window(total: usize, page: i32, page_size: i32) -> (usize, usize) {
    let size = page_size as usize;
    let start = ((page - 1) as usize).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);
    (start, end)
}

fn total_pages(total_items: i32, page_size: i32) -> i32 {
    let pages = (total_items + page_size - 1) / page_size;
    pages.max(1)
}
