use std::collections::{HashSet, VecDeque};

use crate::model::Mailbox;

use super::builder::HierarchyIndex;

/// All transitive reports of `root_id`, excluding the root itself.
///
/// An identifier absent from the snapshot has no sub-org: mailboxes whose
/// manager reference dangles are roots of their own trees, not reports of
/// the missing id. Result order is unspecified.
pub fn descendants(root_id: &str, mailboxes: &[Mailbox]) -> Vec<Mailbox> {
    let index = HierarchyIndex::build(mailboxes);
    collect_descendants(root_id, &index)
        .into_iter()
        .cloned()
        .collect()
}

/// Breadth-first walk over the direct-report index with an explicit queue.
/// A node already visited in this traversal is never enqueued again, so a
/// looping manager chain cannot keep the walk alive.
pub(crate) fn collect_descendants<'a>(
    root_id: &str,
    index: &HierarchyIndex<'a>,
) -> Vec<&'a Mailbox> {
    let Some(root) = index.get(root_id) else {
        return Vec::new();
    };

    let mut found: Vec<&'a Mailbox> = Vec::new();
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();

    visited.insert(root.identifier.as_str());
    queue.push_back(root.identifier.as_str());

    while let Some(current) = queue.pop_front() {
        for &report in index.reports_of(current) {
            if visited.insert(report.identifier.as_str()) {
                found.push(report);
                queue.push_back(report.identifier.as_str());
            }
        }
    }

    found
}

/// Sub-org membership, root included: a manager always counts as part of
/// their own sub-org.
pub fn is_descendant(root_id: &str, candidate_id: &str, mailboxes: &[Mailbox]) -> bool {
    if root_id == candidate_id {
        return true;
    }

    let index = HierarchyIndex::build(mailboxes);
    collect_descendants(root_id, &index)
        .iter()
        .any(|mailbox| mailbox.identifier == candidate_id)
}
