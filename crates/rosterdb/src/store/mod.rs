use crate::{
    error::ErrorClass,
    record::{Record, RecordId, RoleRecord, UserRecord},
    seed::SeedSet,
};
use derive_more::{Deref, DerefMut};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },
}

impl StoreError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::NotFound
    }

    pub(crate) fn not_found<R: Record>(id: R::Id) -> Self {
        Self::NotFound {
            entity: R::ENTITY,
            id: id.raw(),
        }
    }
}

///
/// RecordSet
///
/// Insertion-ordered collection of one record kind. The set owns its
/// rows exclusively; readers get snapshot slices, never mutable access.
///
/// Id assignment is a high-water counter: the next id is one past the
/// highest id ever assigned, so deleting the newest row does not free
/// its id for reuse within the session.
///

pub struct RecordSet<R: Record> {
    rows: Vec<R>,
    next_id: u32,
}

impl<R: Record> RecordSet<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Snapshot of the current rows in insertion order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.iter()
    }

    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: R::Id) -> Option<&mut R> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Materialize a draft under the next id and append it.
    pub fn insert(&mut self, draft: R::Draft) -> &R {
        self.insert_row(|id| R::from_draft(id, draft))
    }

    /// Append a row built from the next id. Seed loading uses this to
    /// carry fields a draft cannot express.
    pub(crate) fn insert_row(&mut self, make: impl FnOnce(R::Id) -> R) -> &R {
        let id = R::Id::from_raw(self.next_id);
        self.next_id += 1;

        self.rows.push(make(id));
        self.rows.last().expect("row was just pushed")
    }

    /// Merge a patch into the matching row.
    pub fn update(&mut self, id: R::Id, patch: R::Patch) -> Result<&R, StoreError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| StoreError::not_found::<R>(id))?;

        row.apply(patch);

        Ok(row)
    }

    /// Remove and return the matching row.
    pub fn remove(&mut self, id: R::Id) -> Result<R, StoreError> {
        let pos = self
            .rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| StoreError::not_found::<R>(id))?;

        Ok(self.rows.remove(pos))
    }

    /// Rewrite every row in place with a single pass.
    /// Returns how many rows the closure reported as changed.
    pub(crate) fn rewrite(&mut self, mut f: impl FnMut(&mut R) -> bool) -> usize {
        let mut changed = 0;
        for row in &mut self.rows {
            if f(row) {
                changed += 1;
            }
        }

        changed
    }
}

impl<R: Record> Default for RecordSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// UserSet / RoleSet
///

#[derive(Default, Deref, DerefMut)]
pub struct UserSet(RecordSet<UserRecord>);

#[derive(Default, Deref, DerefMut)]
pub struct RoleSet(RecordSet<RoleRecord>);

///
/// Roster
///
/// The authoritative store for one session. Owns the user and role
/// collections; all mutation goes through [`crate::gateway::Gateway`],
/// readers only ever see snapshots.
///

#[derive(Default)]
pub struct Roster {
    users: UserSet,
    roles: RoleSet,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a seed set, assigning ids through the normal
    /// insertion path so later inserts continue the sequence.
    #[must_use]
    pub fn from_seed(seed: SeedSet) -> Self {
        let mut roster = Self::new();
        for role in seed.roles {
            roster.roles.insert(role);
        }
        for user in seed.users {
            // Seed rows may carry sign-in history; drafts never do.
            roster.users.insert_row(|id| user.into_record(id));
        }

        roster
    }

    #[must_use]
    pub const fn users(&self) -> &UserSet {
        &self.users
    }

    #[must_use]
    pub const fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub(crate) const fn users_mut(&mut self) -> &mut UserSet {
        &mut self.users
    }

    pub(crate) const fn roles_mut(&mut self) -> &mut RoleSet {
        &mut self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{UserDraft, UserId, UserPatch, UserStatus};

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Editor".into(),
            status: None,
        }
    }

    #[test]
    fn insert_assigns_sequential_ids_from_one() {
        let mut set: RecordSet<UserRecord> = RecordSet::new();
        assert!(set.is_empty());

        let first = set.insert(draft("Ana")).id;
        let second = set.insert(draft("Carlos")).id;

        assert_eq!(first.raw(), 1);
        assert_eq!(second.raw(), 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_continues_past_max_id() {
        let mut set: RecordSet<UserRecord> = RecordSet::new();
        set.insert(draft("Ana"));
        let second = set.insert(draft("Carlos")).id;
        set.remove(second).unwrap();

        // High-water assignment: id 2 is spent even though its row is gone.
        let third = set.insert(draft("Eva")).id;
        assert_eq!(third.raw(), 3);
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut set: RecordSet<UserRecord> = RecordSet::new();
        let id = set.insert(draft("Ana")).id;

        let row = set
            .update(
                id,
                UserPatch {
                    status: Some(UserStatus::Active),
                    ..UserPatch::default()
                },
            )
            .unwrap();

        assert_eq!(row.status, UserStatus::Active);
        assert_eq!(row.name, "Ana");
        assert_eq!(row.email, "ana@example.com");
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut set: RecordSet<UserRecord> = RecordSet::new();
        let err = set
            .update(UserId::from_raw(9), UserPatch::default())
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound { entity: "user", id: 9 }));
    }

    #[test]
    fn remove_returns_row_and_preserves_order() {
        let mut set: RecordSet<UserRecord> = RecordSet::new();
        let a = set.insert(draft("Ana")).id;
        set.insert(draft("Carlos"));
        set.insert(draft("Eva"));

        let removed = set.remove(a).unwrap();
        assert_eq!(removed.name, "Ana");

        let names: Vec<_> = set.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Carlos", "Eva"]);
    }
}
