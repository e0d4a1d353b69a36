use serde_json::{Map, Value};

use crate::model::Mailbox;

/// The fixed set of projectable mailbox fields. Projection only ever copies
/// from this set; a name outside it contributes nothing to the output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    UserFullName,
    JobTitle,
    DepartmentId,
    Department,
    ManagerIdentifier,
    OrgDepth,
    SubOrgSize,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mailbox_identifier" => Some(Self::Identifier),
            "user_full_name" => Some(Self::UserFullName),
            "job_title" => Some(Self::JobTitle),
            "department_id" => Some(Self::DepartmentId),
            "department" => Some(Self::Department),
            "manager_mailbox_identifier" => Some(Self::ManagerIdentifier),
            "org_depth" => Some(Self::OrgDepth),
            "sub_org_size" => Some(Self::SubOrgSize),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "mailbox_identifier",
            Self::UserFullName => "user_full_name",
            Self::JobTitle => "job_title",
            Self::DepartmentId => "department_id",
            Self::Department => "department",
            Self::ManagerIdentifier => "manager_mailbox_identifier",
            Self::OrgDepth => "org_depth",
            Self::SubOrgSize => "sub_org_size",
        }
    }

    pub fn value(&self, mailbox: &Mailbox) -> Value {
        match self {
            Self::Identifier => Value::String(mailbox.identifier.clone()),
            Self::UserFullName => Value::String(mailbox.user_full_name.clone()),
            Self::JobTitle => Value::String(mailbox.job_title.clone()),
            Self::DepartmentId => Value::from(mailbox.department_id),
            Self::Department => Value::String(mailbox.department.clone()),
            Self::ManagerIdentifier => match &mailbox.manager_identifier {
                Some(manager) => Value::String(manager.clone()),
                None => Value::Null,
            },
            Self::OrgDepth => Value::from(mailbox.org_depth),
            Self::SubOrgSize => Value::from(mailbox.sub_org_size),
        }
    }
}

/// Restrict each mailbox to the requested fields. Unrecognized names are
/// dropped; a list of only unrecognized names yields empty rows.
pub fn project(mailboxes: &[Mailbox], fields: &[String]) -> Vec<Map<String, Value>> {
    let selected: Vec<Field> = fields
        .iter()
        .filter_map(|name| Field::from_name(name))
        .collect();

    mailboxes
        .iter()
        .map(|mailbox| {
            let mut row = Map::new();
            for field in &selected {
                row.insert(field.name().to_string(), field.value(mailbox));
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn unknown_field_names_are_dropped() {
        let mailboxes = vec![testing::mailbox("a@falafel.org", "Ada Alpha", None)];
        let rows = project(
            &mailboxes,
            &["user_full_name".to_string(), "shoe_size".to_string()],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["user_full_name"], "Ada Alpha");
    }
}
