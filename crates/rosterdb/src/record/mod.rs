mod role;
mod user;

pub use role::*;
pub use user::*;

use std::fmt::Display;

///
/// RecordId
///
/// Typed primary key over a raw `u32`.
/// Ids are assigned by the owning record set and never reused.
///

pub trait RecordId: Copy + Eq + Ord + Display {
    fn from_raw(raw: u32) -> Self;

    fn raw(self) -> u32;
}

///
/// Record
///
/// A typed row held by a [`crate::store::RecordSet`].
///
/// `Draft` is the construction input and `Patch` the partial update;
/// a patch field left as `None` keeps the stored value untouched.
///

pub trait Record {
    type Id: RecordId;
    type Draft;
    type Patch;

    /// Lowercase entity label used in messages and reports.
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    /// Materialize a draft under a store-assigned id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Merge a partial update into the record.
    fn apply(&mut self, patch: Self::Patch);
}

/// Declare a `u32`-backed id newtype with its [`RecordId`] impl.
macro_rules! record_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            ::serde::Deserialize,
            ::serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $crate::record::RecordId for $name {
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use record_id;
