//! Profile form buffers
//!
//! Holds what the user is typing on the profile page. The password buffer is
//! accepted but inert: it is never handed to the dispatcher, never logged, and
//! is wiped from memory when the form is dropped.

use disaster_drive_core::{Role, UserProfile};
use std::fmt;
use zeroize::Zeroizing;

#[derive(Clone, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub role: Role,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut form = Self::default();
        form.populate(profile);
        form
    }

    /// Overwrites the visible fields. The password buffer is left alone.
    pub fn populate(&mut self, profile: &UserProfile) {
        self.username.clone_from(&profile.username);
        self.email.clone_from(&profile.email);
        self.role = profile.role;
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile::new(self.username.clone(), self.email.clone(), self.role)
    }
}

impl fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_keeps_password() {
        let mut form = ProfileForm::default();
        form.password.push_str("hunter2");
        form.populate(&UserProfile::new("alice", "a@x.com", Role::Manager));

        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.role, Role::Manager);
        assert_eq!(form.password.as_str(), "hunter2");
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut form = ProfileForm::from_profile(&UserProfile::default());
        form.password.push_str("s3cret-pass");
        let rendered = format!("{:?}", form);
        assert!(!rendered.contains("s3cret-pass"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("demoUser"));
    }

    #[test]
    fn test_to_profile_ignores_password() {
        let mut form = ProfileForm::from_profile(&UserProfile::default());
        form.password.push_str("anything");
        assert_eq!(form.to_profile(), UserProfile::default());
    }
}
