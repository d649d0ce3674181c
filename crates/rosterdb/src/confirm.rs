use crate::{
    error::{Error, ErrorClass},
    gateway::Gateway,
    notify::NotifySink,
    record::{RoleId, UserId},
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ConfirmError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfirmError {
    #[error("a confirmation for {pending} is already pending")]
    AlreadyPending { pending: DeleteTarget },

    #[error("no confirmation is pending")]
    NothingPending,
}

impl ConfirmError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::InvalidState
    }
}

///
/// DeleteTarget
///
/// The record a pending confirmation would delete.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum DeleteTarget {
    Role(RoleId),
    User(UserId),
}

impl fmt::Display for DeleteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(id) => write!(f, "role {id}"),
            Self::User(id) => write!(f, "user {id}"),
        }
    }
}

///
/// ConfirmGate
///
/// Two-step guard in front of destructive mutations. A delete is first
/// requested, capturing its target; nothing touches the roster until the
/// explicit confirm. There is no timeout, and at most one target may be
/// pending at a time.
///

#[derive(Debug, Default)]
pub struct ConfirmGate {
    pending: Option<DeleteTarget>,
}

impl ConfirmGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<DeleteTarget> {
        self.pending
    }

    /// Capture a delete target, entering the pending state.
    ///
    /// The outstanding target must be resolved first; a second request
    /// fails and leaves the pending target untouched.
    pub fn request(&mut self, target: DeleteTarget) -> Result<(), Error> {
        if let Some(pending) = self.pending {
            return Err(ConfirmError::AlreadyPending { pending }.into());
        }

        self.pending = Some(target);

        Ok(())
    }

    /// Discard the pending target without side effects.
    pub const fn cancel(&mut self) -> Option<DeleteTarget> {
        self.pending.take()
    }

    /// Perform the captured delete through the gateway.
    ///
    /// The gate resolves to idle either way; a blocked delete (for
    /// example a role still in use) surfaces its error after the gate
    /// has already returned to idle, matching a dialog that closes
    /// before the failure is announced.
    pub fn confirm<S: NotifySink>(&mut self, gateway: &mut Gateway<'_, S>) -> Result<(), Error> {
        let target = self.pending.take().ok_or(ConfirmError::NothingPending)?;

        match target {
            DeleteTarget::Role(id) => gateway.delete_role(id).map(|_| ()),
            DeleteTarget::User(id) => gateway.delete_user(id).map(|_| ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notify::NullSink,
        record::RecordId,
        seed,
        store::Roster,
    };

    fn seeded() -> Roster {
        Roster::from_seed(seed::demo())
    }

    #[test]
    fn cancel_leaves_store_unchanged() {
        let mut roster = seeded();
        let users_before = roster.users().len();

        let mut gate = ConfirmGate::new();
        gate.request(DeleteTarget::User(UserId::from_raw(1))).unwrap();
        assert!(!gate.is_idle());

        let cancelled = gate.cancel();
        assert_eq!(cancelled, Some(DeleteTarget::User(UserId::from_raw(1))));
        assert!(gate.is_idle());
        assert_eq!(roster.users().len(), users_before);

        // The roster was never even borrowed; run a no-op to keep the
        // mutable path honest.
        let sink = NullSink;
        let gateway = Gateway::new(&mut roster, &sink);
        assert_eq!(gateway.roster().users().len(), users_before);
    }

    #[test]
    fn confirm_deletes_exactly_one_record_and_returns_to_idle() {
        let mut roster = seeded();
        let users_before = roster.users().len();
        let sink = NullSink;
        let mut gateway = Gateway::new(&mut roster, &sink);

        let mut gate = ConfirmGate::new();
        gate.request(DeleteTarget::User(UserId::from_raw(2))).unwrap();
        gate.confirm(&mut gateway).unwrap();

        assert!(gate.is_idle());
        assert_eq!(gateway.roster().users().len(), users_before - 1);
        assert!(gateway.roster().users().get(UserId::from_raw(2)).is_none());
    }

    #[test]
    fn second_request_while_pending_is_invalid_state() {
        let mut gate = ConfirmGate::new();
        gate.request(DeleteTarget::User(UserId::from_raw(1))).unwrap();

        let err = gate
            .request(DeleteTarget::Role(RoleId::from_raw(1)))
            .unwrap_err();
        assert!(err.is_invalid_state());

        // The original target is still the pending one.
        assert_eq!(gate.pending(), Some(DeleteTarget::User(UserId::from_raw(1))));
    }

    #[test]
    fn confirm_without_request_is_invalid_state() {
        let mut roster = seeded();
        let sink = NullSink;
        let mut gateway = Gateway::new(&mut roster, &sink);

        let mut gate = ConfirmGate::new();
        let err = gate.confirm(&mut gateway).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn blocked_role_delete_still_resolves_the_gate() {
        let mut roster = seeded();
        let sink = NullSink;
        let mut gateway = Gateway::new(&mut roster, &sink);

        // Role 2 (Editor) is referenced by seeded users.
        let mut gate = ConfirmGate::new();
        gate.request(DeleteTarget::Role(RoleId::from_raw(2))).unwrap();

        let err = gate.confirm(&mut gateway).unwrap_err();
        assert!(err.role_in_use().is_some());
        assert!(gate.is_idle());
        assert!(gateway.roster().roles().get(RoleId::from_raw(2)).is_some());
    }
}
