//! Session seed data.
//!
//! A roster session starts from a seed set and ends when the roster is
//! dropped; nothing persists across sessions. Embedders can supply their
//! own seed through serde, or start from [`demo`].

use crate::record::{Permission, RoleDraft, RoleName, UserId, UserRecord, UserStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// SeedSet
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeedSet {
    #[serde(default)]
    pub roles: Vec<RoleDraft>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

///
/// SeedUser
///
/// A seeded user row. Unlike a draft, a seed row may carry sign-in
/// history and always names its status.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub role: RoleName,
    pub status: UserStatus,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl SeedUser {
    pub(crate) fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
            last_seen: self.last_seen,
        }
    }
}

/// The demo dataset: three roles and five users.
#[must_use]
pub fn demo() -> SeedSet {
    let now = Utc::now();

    let all = [
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::View,
    ];
    let editing = [Permission::Edit, Permission::View];
    let viewing = [Permission::View];

    SeedSet {
        roles: vec![
            role(
                "Administrator",
                "Full access to every system function",
                &all,
            ),
            role("Editor", "Can edit content but not manage users", &editing),
            role(
                "Viewer",
                "Read-only access, nothing can be modified",
                &viewing,
            ),
        ],
        users: vec![
            user(
                "Ana García",
                "ana@example.com",
                "Administrator",
                UserStatus::Active,
                Some(now - Duration::hours(2)),
            ),
            user(
                "Carlos Rodríguez",
                "carlos@example.com",
                "Editor",
                UserStatus::Active,
                Some(now - Duration::minutes(5)),
            ),
            user(
                "Eva Martínez",
                "eva@example.com",
                "Viewer",
                UserStatus::Inactive,
                Some(now - Duration::days(3)),
            ),
            user(
                "Miguel Sánchez",
                "miguel@example.com",
                "Editor",
                UserStatus::Active,
                Some(now),
            ),
            user(
                "Laura Fernández",
                "laura@example.com",
                "Viewer",
                UserStatus::Pending,
                None,
            ),
        ],
    }
}

fn role(name: &str, description: &str, permissions: &[Permission]) -> RoleDraft {
    RoleDraft {
        name: name.into(),
        description: description.to_string(),
        permissions: permissions.iter().copied().collect::<BTreeSet<_>>(),
    }
}

fn user(
    name: &str,
    email: &str,
    role: &str,
    status: UserStatus,
    last_seen: Option<DateTime<Utc>>,
) -> SeedUser {
    SeedUser {
        name: name.to_string(),
        email: email.to_string(),
        role: role.into(),
        status,
        last_seen,
    }
}
