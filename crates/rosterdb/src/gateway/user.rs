use crate::{
    error::Error,
    gateway::Gateway,
    notify::NotifySink,
    record::{RoleName, UserDraft, UserId, UserPatch, UserRecord},
    store::StoreError,
    validate::require_text,
};
use chrono::Utc;

impl<S: NotifySink> Gateway<'_, S> {
    /// Create a user from a draft.
    ///
    /// Name and email are required after trimming. Status falls back to
    /// pending; a new user has never signed in.
    pub fn create_user(&mut self, draft: UserDraft) -> Result<UserRecord, Error> {
        let name = require_text("user", "name", &draft.name).map_err(|err| self.reject(err))?;
        let email = require_text("user", "email", &draft.email).map_err(|err| self.reject(err))?;

        let row = self.roster
            .users_mut()
            .insert(UserDraft {
                name,
                email,
                ..draft
            })
            .clone();

        self.success(format!("User {} created", row.name));

        Ok(row)
    }

    /// Merge a patch into an existing user.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Result<UserRecord, Error> {
        let row = self.roster.users_mut().update(id, patch)?.clone();

        self.success(format!("User {} updated", row.name));

        Ok(row)
    }

    /// Reassign a user's role.
    pub fn assign_role(&mut self, id: UserId, role: RoleName) -> Result<UserRecord, Error> {
        let row = self.roster
            .users_mut()
            .update(id, UserPatch::role(role))?
            .clone();

        self.success(format!("Role of {} changed to {}", row.name, row.role));

        Ok(row)
    }

    /// Stamp a sign-in. Bookkeeping only, no notification.
    pub fn record_sign_in(&mut self, id: UserId) -> Result<(), Error> {
        let row = self.roster
            .users_mut()
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found::<UserRecord>(id))?;

        row.last_seen = Some(Utc::now());

        Ok(())
    }

    /// Remove a user. Unconditional; destructive-action confirmation is
    /// the confirm gate's concern.
    pub fn delete_user(&mut self, id: UserId) -> Result<UserRecord, Error> {
        let row = self.roster.users_mut().remove(id)?;

        self.success(format!("User {} deleted", row.name));

        Ok(row)
    }
}
