//! Fixture helpers for unit tests.

use crate::model::Mailbox;

pub fn mailbox(identifier: &str, full_name: &str, manager: Option<&str>) -> Mailbox {
    Mailbox {
        identifier: identifier.to_string(),
        user_full_name: full_name.to_string(),
        job_title: "Engineer".to_string(),
        department_id: 1,
        department: "Engineering".to_string(),
        manager_identifier: manager.map(String::from),
        org_depth: 0,
        sub_org_size: 0,
    }
}

/// CEO -> CTO -> {Dev1, Dev2}: the smallest forest with two levels of
/// reports under one root.
pub fn org_fixture() -> Vec<Mailbox> {
    vec![
        mailbox("ceo@falafel.org", "Casey Ode", None),
        mailbox("cto@falafel.org", "Charlie Tounsi", Some("ceo@falafel.org")),
        mailbox("dev1@falafel.org", "Dana Vaughn", Some("cto@falafel.org")),
        mailbox("dev2@falafel.org", "Devon Wu", Some("cto@falafel.org")),
    ]
}
