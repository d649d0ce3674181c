//! End-to-end session flow through the public API.

use rosterdb::{
    confirm::{ConfirmGate, DeleteTarget},
    filter::{USER_SEARCH_FIELDS, filter},
    gateway::Gateway,
    notify::{MemorySink, NotifyKind},
    obs::roster_report,
    prelude::*,
    record::{RecordId, RolePatch, UserDraft},
    seed,
    store::Roster,
};

#[test]
fn admin_session_round_trip() {
    let mut roster = Roster::from_seed(seed::demo());
    let sink = MemorySink::new();

    // The search box narrows the user list without touching the store.
    let view = filter(roster.users().records(), "edit", USER_SEARCH_FIELDS);
    assert_eq!(view.len(), 2);
    assert_eq!(roster.users().len(), 5);

    let mut gateway = Gateway::new(&mut roster, &sink);

    // A new user continues the id sequence past the seed.
    let dana = gateway
        .create_user(UserDraft {
            name: "Dana Hill".to_string(),
            email: "dana@example.com".to_string(),
            role: RoleName::new("Viewer"),
            status: None,
        })
        .unwrap();
    assert_eq!(dana.id.raw(), 6);
    assert_eq!(dana.status, UserStatus::Pending);

    // Renaming a role carries every referencing user along.
    gateway
        .update_role(RoleId::from_raw(3), RolePatch::rename(RoleName::new("Reader")))
        .unwrap();
    let readers = gateway
        .roster()
        .users()
        .iter()
        .filter(|u| u.role.as_str() == "Reader")
        .count();
    assert_eq!(readers, 3);

    // Deleting the renamed role is blocked while users reference it.
    let err = gateway.delete_role(RoleId::from_raw(3)).unwrap_err();
    assert_eq!(err.role_in_use(), Some(("Reader", 3)));

    // Destructive actions go through the confirm gate.
    let mut gate = ConfirmGate::new();
    gate.request(DeleteTarget::User(dana.id)).unwrap();
    gate.confirm(&mut gateway).unwrap();
    assert!(gateway.roster().users().get(dana.id).is_none());

    // The dashboard summary reflects the final state.
    let report = roster_report(gateway.roster());
    assert_eq!(report.total_users, 5);
    assert_eq!(report.total_roles, 3);
    assert!(
        report
            .role_usage
            .iter()
            .any(|u| u.role == "Reader" && u.users == 2)
    );

    // Every mutation surfaced a notification; the blocked delete was the
    // only error among them.
    let seen = sink.take();
    let errors = seen.iter().filter(|n| n.kind == NotifyKind::Error).count();
    assert_eq!(errors, 1);
    assert_eq!(seen.len(), 4);
}
