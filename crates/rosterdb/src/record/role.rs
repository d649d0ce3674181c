use crate::{
    filter::{SearchField, Searchable},
    record::{Record, record_id},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

record_id!(
    ///
    /// RoleId
    ///
    RoleId
);

///
/// RoleName
///
/// The name users reference a role by. Kept as its own type so a role
/// reference never gets confused with display text.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

///
/// RoleRecord
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoleRecord {
    pub id: RoleId,
    pub name: RoleName,
    pub description: String,
    pub permissions: BTreeSet<Permission>,
}

impl Record for RoleRecord {
    type Id = RoleId;
    type Draft = RoleDraft;
    type Patch = RolePatch;

    const ENTITY: &'static str = "role";

    fn id(&self) -> RoleId {
        self.id
    }

    fn from_draft(id: RoleId, draft: RoleDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            permissions: draft.permissions,
        }
    }

    fn apply(&mut self, patch: RolePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
    }
}

impl Searchable for RoleRecord {
    fn field_text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Description => Some(&self.description),
            SearchField::Name => Some(self.name.as_str()),
            SearchField::Email | SearchField::Role => None,
        }
    }
}

///
/// RoleDraft
///
/// Construction input for a role. Permissions default to the empty set.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoleDraft {
    pub name: RoleName,
    pub description: String,
    #[serde(default)]
    pub permissions: BTreeSet<Permission>,
}

///
/// RolePatch
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RolePatch {
    #[serde(default)]
    pub name: Option<RoleName>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Option<BTreeSet<Permission>>,
}

impl RolePatch {
    /// Patch that only renames the role.
    #[must_use]
    pub fn rename(name: RoleName) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

///
/// Permission
///
/// Capability token granted by a role. The set is closed; role semantics
/// beyond the token itself belong to the embedding application.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Permission {
    Create,
    Delete,
    Edit,
    View,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::View => "view",
        };
        write!(f, "{label}")
    }
}
