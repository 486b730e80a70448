use crate::collection::Entity;
use crate::domain::{User, UserPatch};

impl Entity for User {
    type Id = String;
    type Patch = UserPatch;

    fn id(&self) -> &String { &self.profile().id }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        let profile = self.profile_mut();
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(email) = patch.email {
            profile.email = email;
        }
        Ok(())
    }
}
