//! Core runtime for rosterdb: typed records, the roster store, filtered
//! views, the validated mutation gateway, and the confirm gate guarding
//! destructive actions.
//!
//! One `Roster` is one session. It starts from a seed set, is mutated
//! only through a `Gateway`, and is discarded at session end; nothing
//! persists.

pub mod confirm;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod notify;
pub mod obs;
pub mod record;
pub mod seed;
pub mod store;

mod validate;

pub use error::Error;

/// Workspace version re-export for downstream tooling and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::record::{
        Permission, RoleId, RoleName, RoleRecord, UserId, UserRecord, UserStatus,
    };
}
