use crate::{
    filter::{SearchField, Searchable},
    record::{Record, RoleName, record_id},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

record_id!(
    ///
    /// UserId
    ///
    UserId
);

///
/// UserRecord
///
/// A member of the roster. The role linkage is by role *name*,
/// matching how the rest of the system refers to roles.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: RoleName,
    pub status: UserStatus,

    /// Last sign-in time. `None` means the user has never signed in.
    pub last_seen: Option<DateTime<Utc>>,
}

impl Record for UserRecord {
    type Id = UserId;
    type Draft = UserDraft;
    type Patch = UserPatch;

    const ENTITY: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: draft.status.unwrap_or_default(),
            last_seen: None,
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Searchable for UserRecord {
    fn field_text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Email => Some(&self.email),
            SearchField::Name => Some(&self.name),
            SearchField::Role => Some(self.role.as_str()),
            SearchField::Description => None,
        }
    }
}

///
/// UserDraft
///
/// Construction input for a user. Status falls back to
/// [`UserStatus::Pending`] when unspecified.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: RoleName,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

///
/// UserPatch
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<RoleName>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl UserPatch {
    /// Patch that only reassigns the role.
    #[must_use]
    pub fn role(role: RoleName) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

///
/// UserStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum UserStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        };
        write!(f, "{label}")
    }
}
