// Shared fixtures for the integration suites. Every test builds its own
// service over an in-memory store; nothing is shared between tests.
#![allow(dead_code)]

use mailbox_directory::model::Mailbox;
use mailbox_directory::services::MailboxService;
use mailbox_directory::store::InMemoryMailboxStore;

pub fn mailbox(
    identifier: &str,
    full_name: &str,
    job_title: &str,
    department_id: i32,
    department: &str,
    manager: Option<&str>,
) -> Mailbox {
    Mailbox {
        identifier: identifier.to_string(),
        user_full_name: full_name.to_string(),
        job_title: job_title.to_string(),
        department_id,
        department: department.to_string(),
        manager_identifier: manager.map(String::from),
        org_depth: 0,
        sub_org_size: 0,
    }
}

fn with_metrics(mut mailbox: Mailbox, org_depth: i32, sub_org_size: i32) -> Mailbox {
    mailbox.org_depth = org_depth;
    mailbox.sub_org_size = sub_org_size;
    mailbox
}

/// Seven-person company across three departments, with depth and size
/// already consistent with the manager references:
///
///   alice (Executive)
///   ├── david (Engineering) ── erin ── {frank, grace}
///   └── hanna (People) ── ivan
pub fn falafel_org() -> Vec<Mailbox> {
    vec![
        with_metrics(
            mailbox(
                "alice.green@falafel.org",
                "Alice Green",
                "Chief Executive Officer",
                1,
                "Executive",
                None,
            ),
            0,
            6,
        ),
        with_metrics(
            mailbox(
                "david.brown@falafel.org",
                "David Brown",
                "Chief Technology Officer",
                2,
                "Engineering",
                Some("alice.green@falafel.org"),
            ),
            1,
            3,
        ),
        with_metrics(
            mailbox(
                "erin.hale@falafel.org",
                "Erin Hale",
                "Engineering Manager",
                2,
                "Engineering",
                Some("david.brown@falafel.org"),
            ),
            2,
            2,
        ),
        with_metrics(
            mailbox(
                "frank.moss@falafel.org",
                "Frank Moss",
                "Software Engineer",
                2,
                "Engineering",
                Some("erin.hale@falafel.org"),
            ),
            3,
            0,
        ),
        with_metrics(
            mailbox(
                "grace.liu@falafel.org",
                "Grace Liu",
                "Software Engineer",
                2,
                "Engineering",
                Some("erin.hale@falafel.org"),
            ),
            3,
            0,
        ),
        with_metrics(
            mailbox(
                "hanna.kim@falafel.org",
                "Hanna Kim",
                "Head of People",
                3,
                "People",
                Some("alice.green@falafel.org"),
            ),
            1,
            1,
        ),
        with_metrics(
            mailbox(
                "ivan.petrov@falafel.org",
                "Ivan Petrov",
                "Recruiter",
                3,
                "People",
                Some("hanna.kim@falafel.org"),
            ),
            2,
            0,
        ),
    ]
}

/// CEO -> CTO -> {Dev1, Dev2}, metrics left at zero so recalculation tests
/// start from an unmetered import.
pub fn small_org() -> Vec<Mailbox> {
    vec![
        mailbox(
            "ceo@falafel.org",
            "Casey Ode",
            "Chief Executive Officer",
            1,
            "Executive",
            None,
        ),
        mailbox(
            "cto@falafel.org",
            "Charlie Tounsi",
            "Chief Technology Officer",
            2,
            "Engineering",
            Some("ceo@falafel.org"),
        ),
        mailbox(
            "dev1@falafel.org",
            "Dana Vaughn",
            "Software Engineer",
            2,
            "Engineering",
            Some("cto@falafel.org"),
        ),
        mailbox(
            "dev2@falafel.org",
            "Devon Wu",
            "Software Engineer",
            2,
            "Engineering",
            Some("cto@falafel.org"),
        ),
    ]
}

pub fn service_with(mailboxes: Vec<Mailbox>) -> MailboxService<InMemoryMailboxStore> {
    MailboxService::new(InMemoryMailboxStore::with_mailboxes(mailboxes))
}
