mod common;

use std::collections::HashSet;

use mailbox_directory::hierarchy::{descendants, is_descendant};

fn identifiers(mailboxes: &[mailbox_directory::model::Mailbox]) -> HashSet<String> {
    mailboxes.iter().map(|m| m.identifier.clone()).collect()
}

#[test]
fn descendants_cover_the_whole_sub_tree() {
    let forest = common::small_org();
    let found = descendants("cto@falafel.org", &forest);

    assert_eq!(
        identifiers(&found),
        HashSet::from(["dev1@falafel.org".to_string(), "dev2@falafel.org".to_string()])
    );
}

#[test]
fn descendants_exclude_the_root_itself() {
    let forest = common::falafel_org();
    let found = descendants("alice.green@falafel.org", &forest);

    assert_eq!(found.len(), 6);
    assert!(!identifiers(&found).contains("alice.green@falafel.org"));
}

#[test]
fn descendants_of_unknown_root_are_empty() {
    let forest = common::falafel_org();
    assert!(descendants("nobody@falafel.org", &forest).is_empty());
}

#[test]
fn descendants_of_a_leaf_are_empty() {
    let forest = common::falafel_org();
    assert!(descendants("frank.moss@falafel.org", &forest).is_empty());
}

#[test]
fn membership_includes_the_root() {
    let forest = common::small_org();
    assert!(is_descendant("cto@falafel.org", "cto@falafel.org", &forest));
}

#[test]
fn membership_agrees_with_descendants_for_every_pair() {
    let forest = common::falafel_org();

    for root in &forest {
        let in_sub_org = identifiers(&descendants(&root.identifier, &forest));
        for candidate in &forest {
            let expected = candidate.identifier == root.identifier
                || in_sub_org.contains(&candidate.identifier);
            assert_eq!(
                is_descendant(&root.identifier, &candidate.identifier, &forest),
                expected,
                "root={} candidate={}",
                root.identifier,
                candidate.identifier
            );
        }
    }
}

#[test]
fn membership_never_points_upward() {
    let forest = common::small_org();
    assert!(is_descendant("cto@falafel.org", "dev1@falafel.org", &forest));
    assert!(!is_descendant("cto@falafel.org", "ceo@falafel.org", &forest));
    assert!(!is_descendant("dev1@falafel.org", "dev2@falafel.org", &forest));
}

#[test]
fn looping_manager_chain_cannot_stall_the_walk() {
    let forest = vec![
        common::mailbox(
            "ying@falafel.org",
            "Ying One",
            "Manager",
            1,
            "Ops",
            Some("yang@falafel.org"),
        ),
        common::mailbox(
            "yang@falafel.org",
            "Yang Two",
            "Manager",
            1,
            "Ops",
            Some("ying@falafel.org"),
        ),
        common::mailbox(
            "kid@falafel.org",
            "Kid Three",
            "Analyst",
            1,
            "Ops",
            Some("ying@falafel.org"),
        ),
    ];

    let found = descendants("ying@falafel.org", &forest);
    assert_eq!(
        identifiers(&found),
        HashSet::from(["yang@falafel.org".to_string(), "kid@falafel.org".to_string()])
    );
}
