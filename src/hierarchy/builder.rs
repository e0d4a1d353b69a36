use std::collections::{HashMap, HashSet};

use crate::model::Mailbox;

/// Output of one metrics recalculation pass: every input mailbox with
/// `org_depth` and `sub_org_size` recomputed, plus the identifiers whose
/// manager chain looped back on itself.
#[derive(Debug, Clone)]
pub struct OrgMetrics {
    pub mailboxes: Vec<Mailbox>,
    pub cycles: Vec<String>,
}

/// Identifier lookup and direct-report index over one snapshot of the
/// directory. Built fresh per operation from the snapshot; never cached
/// across requests.
pub struct HierarchyIndex<'a> {
    by_id: HashMap<&'a str, &'a Mailbox>,
    children: HashMap<&'a str, Vec<&'a Mailbox>>,
}

impl<'a> HierarchyIndex<'a> {
    pub fn build(mailboxes: &'a [Mailbox]) -> Self {
        let mut by_id = HashMap::with_capacity(mailboxes.len());
        let mut children: HashMap<&'a str, Vec<&'a Mailbox>> = HashMap::new();

        for mailbox in mailboxes {
            by_id.insert(mailbox.identifier.as_str(), mailbox);
        }
        for mailbox in mailboxes {
            if let Some(manager) = mailbox.manager() {
                children.entry(manager).or_default().push(mailbox);
            }
        }

        Self { by_id, children }
    }

    pub fn get(&self, identifier: &str) -> Option<&'a Mailbox> {
        self.by_id.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.by_id.contains_key(identifier)
    }

    /// Direct reports of `identifier`; empty for leaves and unknown ids.
    pub fn reports_of(&self, identifier: &str) -> &[&'a Mailbox] {
        self.children
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Walk the manager chain upward from `mailbox`, counting hops.
    ///
    /// The walk stops at a node with no manager, at a reference pointing
    /// outside the snapshot (an implicit root), or when it revisits an
    /// identifier already seen in this walk. Returns the hop count and
    /// whether a revisit occurred.
    pub fn org_depth(&self, mailbox: &Mailbox) -> (i32, bool) {
        let mut depth = 0;
        let mut visited = HashSet::new();
        let mut current = mailbox.identifier.as_str();

        loop {
            if !visited.insert(current) {
                return (depth, true);
            }
            let Some(node) = self.get(current) else {
                return (depth, false);
            };
            let Some(manager) = node.manager() else {
                return (depth, false);
            };
            depth += 1;
            current = manager;
        }
    }
}

/// Recompute org depth and sub-org size for one snapshot of the directory.
///
/// Depths come from walking each mailbox's manager chain. Sizes are
/// accumulated in a single bottom-up pass: nodes are processed deepest
/// first, each contributing `1 + own size` to its parent, which on any
/// acyclic forest equals summing `1 + size(report)` over every direct
/// report.
pub fn recalculate(mailboxes: &[Mailbox]) -> OrgMetrics {
    let index = HierarchyIndex::build(mailboxes);

    let mut depths = Vec::with_capacity(mailboxes.len());
    let mut cycles = Vec::new();
    for mailbox in mailboxes {
        let (depth, cycled) = index.org_depth(mailbox);
        if cycled {
            cycles.push(mailbox.identifier.clone());
        }
        depths.push(depth);
    }

    let mut position = HashMap::with_capacity(mailboxes.len());
    for (i, mailbox) in mailboxes.iter().enumerate() {
        position.insert(mailbox.identifier.as_str(), i);
    }

    let mut order: Vec<usize> = (0..mailboxes.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(depths[i]));

    let mut sizes = vec![0i32; mailboxes.len()];
    for &i in &order {
        let mailbox = &mailboxes[i];
        let Some(manager) = mailbox.manager() else {
            continue;
        };
        // A self-managed mailbox never counts toward its own size
        if manager == mailbox.identifier {
            continue;
        }
        if let Some(&parent) = position.get(manager) {
            sizes[parent] += 1 + sizes[i];
        }
    }

    let mut updated = mailboxes.to_vec();
    for (i, mailbox) in updated.iter_mut().enumerate() {
        mailbox.org_depth = depths[i];
        mailbox.sub_org_size = sizes[i];
    }

    OrgMetrics {
        mailboxes: updated,
        cycles,
    }
}
