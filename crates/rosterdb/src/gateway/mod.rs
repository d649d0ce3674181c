mod role;
mod user;


use crate::{
    error::{Error, ErrorClass},
    notify::{Notification, NotifySink},
    store::Roster,
};
use thiserror::Error as ThisError;

///
/// GatewayError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum GatewayError {
    #[error("{entity} {field} must not be empty")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("role '{role}' is assigned to {count} users and cannot be deleted")]
    RoleInUse { role: String, count: usize },
}

impl GatewayError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MissingField { .. } => ErrorClass::Validation,
            Self::RoleInUse { .. } => ErrorClass::Conflict,
        }
    }
}

///
/// Gateway
///
/// The validated mutation boundary. Borrows the roster exclusively for
/// its lifetime, so every operation is atomic and non-reentrant by
/// construction; domain rules live here and never in the store.
///
/// Successful mutations emit a success notification through the sink;
/// rule violations emit an error notification before returning the
/// error. A failed operation leaves the roster untouched.
///

pub struct Gateway<'a, S: NotifySink> {
    roster: &'a mut Roster,
    sink: &'a S,
}

impl<'a, S: NotifySink> Gateway<'a, S> {
    pub const fn new(roster: &'a mut Roster, sink: &'a S) -> Self {
        Self { roster, sink }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.roster
    }

    pub(crate) fn success(&self, message: String) {
        self.sink.notify(Notification::success(message));
    }

    /// Notify the rule violation, then hand back the structured error.
    pub(crate) fn reject(&self, err: GatewayError) -> Error {
        self.sink.notify(Notification::error(err.to_string()));

        err.into()
    }
}
