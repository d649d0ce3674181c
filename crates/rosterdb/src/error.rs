use crate::{confirm::ConfirmError, gateway::GatewayError, store::StoreError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured runtime error with a stable classification.
/// Every fallible operation in the crate surfaces through this type;
/// the original domain error is preserved in `detail`.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl Error {
    /// Construct an Error without domain detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.class, ErrorClass::Validation)
    }

    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidState)
    }

    /// Referencing-user count when the error is a blocked role delete.
    #[must_use]
    pub fn role_in_use(&self) -> Option<(&str, usize)> {
        match &self.detail {
            Some(ErrorDetail::Gateway(GatewayError::RoleInUse { role, count })) => {
                Some((role.as_str(), *count))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`Error`].
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ErrorDetail {
    #[error("{0}")]
    Confirm(ConfirmError),
    #[error("{0}")]
    Gateway(GatewayError),
    #[error("{0}")]
    Store(StoreError),
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Conflict,
    InvalidState,
    NotFound,
    Validation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Conflict => "conflict",
            Self::InvalidState => "invalid_state",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorOrigin {
    Confirm,
    Gateway,
    Store,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Confirm => "confirm",
            Self::Gateway => "gateway",
            Self::Store => "store",
        };
        write!(f, "{label}")
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self {
            class: err.class(),
            origin: ErrorOrigin::Store,
            message: err.to_string(),
            detail: Some(ErrorDetail::Store(err)),
        }
    }
}

impl From<GatewayError> for Error {
    fn from(err: GatewayError) -> Self {
        Self {
            class: err.class(),
            origin: ErrorOrigin::Gateway,
            message: err.to_string(),
            detail: Some(ErrorDetail::Gateway(err)),
        }
    }
}

impl From<ConfirmError> for Error {
    fn from(err: ConfirmError) -> Self {
        Self {
            class: err.class(),
            origin: ErrorOrigin::Confirm,
            message: err.to_string(),
            detail: Some(ErrorDetail::Confirm(err)),
        }
    }
}
