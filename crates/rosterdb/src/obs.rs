//! Observability: read-side summaries over the roster.
//!
//! Reports are pure snapshots; nothing here touches mutation paths.

use crate::{record::UserStatus, store::Roster};
use serde::Serialize;

///
/// RosterReport
///
/// Point-in-time summary for dashboard surfaces.
///

#[derive(Clone, Debug, Serialize)]
pub struct RosterReport {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub pending_users: usize,
    pub total_roles: usize,

    /// Per-role referencing-user counts, in role collection order.
    pub role_usage: Vec<RoleUsage>,
}

///
/// RoleUsage
///

#[derive(Clone, Debug, Serialize)]
pub struct RoleUsage {
    pub role: String,
    pub users: usize,
}

/// Build a point-in-time roster report.
#[must_use]
pub fn roster_report(roster: &Roster) -> RosterReport {
    let mut active_users = 0;
    let mut inactive_users = 0;
    let mut pending_users = 0;

    for user in roster.users().iter() {
        match user.status {
            UserStatus::Active => active_users += 1,
            UserStatus::Inactive => inactive_users += 1,
            UserStatus::Pending => pending_users += 1,
        }
    }

    let role_usage = roster
        .roles()
        .iter()
        .map(|role| RoleUsage {
            role: role.name.to_string(),
            users: roster
                .users()
                .iter()
                .filter(|user| user.role == role.name)
                .count(),
        })
        .collect();

    RosterReport {
        total_users: roster.users().len(),
        active_users,
        inactive_users,
        pending_users,
        total_roles: roster.roles().len(),
        role_usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn report_counts_statuses_and_role_usage() {
        let roster = Roster::from_seed(seed::demo());
        let report = roster_report(&roster);

        assert_eq!(report.total_users, 5);
        assert_eq!(report.active_users, 3);
        assert_eq!(report.inactive_users, 1);
        assert_eq!(report.pending_users, 1);
        assert_eq!(report.total_roles, 3);

        let usage: Vec<(&str, usize)> = report
            .role_usage
            .iter()
            .map(|u| (u.role.as_str(), u.users))
            .collect();
        assert_eq!(
            usage,
            [("Administrator", 1), ("Editor", 2), ("Viewer", 2)]
        );
    }
}
