use crate::{
    error::Error,
    gateway::{Gateway, GatewayError},
    notify::NotifySink,
    record::{RoleDraft, RoleId, RoleName, RolePatch, RoleRecord},
    store::StoreError,
    validate::require_text,
};

impl<S: NotifySink> Gateway<'_, S> {
    /// Create a role from a draft.
    ///
    /// Name and description are required after trimming; permissions
    /// default to the empty set.
    pub fn create_role(&mut self, draft: RoleDraft) -> Result<RoleRecord, Error> {
        let name =
            require_text("role", "name", draft.name.as_str()).map_err(|err| self.reject(err))?;
        let description = require_text("role", "description", &draft.description)
            .map_err(|err| self.reject(err))?;

        let row = self
            .roster
            .roles_mut()
            .insert(RoleDraft {
                name: RoleName::new(name),
                description,
                permissions: draft.permissions,
            })
            .clone();

        self.success(format!("Role {} created", row.name));

        Ok(row)
    }

    /// Merge a patch into an existing role.
    ///
    /// A rename rewrites every user referencing the old name in the same
    /// operation. The exclusive roster borrow spans the whole rewrite, so
    /// no reader can observe a half-renamed state.
    pub fn update_role(&mut self, id: RoleId, patch: RolePatch) -> Result<RoleRecord, Error> {
        let old_name = self
            .roster
            .roles()
            .get(id)
            .ok_or_else(|| StoreError::not_found::<RoleRecord>(id))?
            .name
            .clone();

        let row = self.roster.roles_mut().update(id, patch)?.clone();

        if row.name != old_name {
            let new_name = row.name.clone();
            self.roster.users_mut().rewrite(|user| {
                if user.role == old_name {
                    user.role = new_name.clone();
                    true
                } else {
                    false
                }
            });
        }

        self.success(format!("Role {} updated", row.name));

        Ok(row)
    }

    /// Remove a role, unless any user still references it.
    ///
    /// The referential check runs at delete time against the live user
    /// collection; a blocked delete reports the exact referencing count
    /// and leaves the role in place.
    pub fn delete_role(&mut self, id: RoleId) -> Result<RoleRecord, Error> {
        let name = self
            .roster
            .roles()
            .get(id)
            .ok_or_else(|| StoreError::not_found::<RoleRecord>(id))?
            .name
            .clone();

        let count = self
            .roster
            .users()
            .iter()
            .filter(|user| user.role == name)
            .count();
        if count > 0 {
            return Err(self.reject(GatewayError::RoleInUse {
                role: name.to_string(),
                count,
            }));
        }

        let row = self.roster.roles_mut().remove(id)?;

        self.success(format!("Role {} deleted", row.name));

        Ok(row)
    }
}
