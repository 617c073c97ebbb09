//! The shared user roster
//!
//! One roster per session, owned by the context and injected wherever users
//! are read or created - never ambient global state. Cards reference roster
//! entries by id.

use crate::types::{User, UserId};

/// Process-wide collection of users shared across all cards and boards
#[derive(Debug, Default, Clone)]
pub struct UserRoster {
    users: Vec<User>,
}

impl UserRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from an existing catalog (seed set)
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Every user, in creation order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Find a user by id
    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Add a user with a fresh id.
    ///
    /// The name must be non-empty after trimming; otherwise nothing is added.
    /// Names are not de-duplicated - two users may share a display name, ids
    /// stay the uniqueness key.
    pub fn add(&mut self, name: &str, avatar: &str) -> Option<&User> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.users.push(User::new(name, avatar));
        self.users.last()
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_empty() {
        let mut roster = UserRoster::new();
        assert!(roster.add("  ", "🧑‍💻").is_none());
        assert!(roster.add("", "🧑‍💻").is_none());
        assert_eq!(roster.len(), 0);

        let user = roster.add("  Zoé ", "🧑‍💻").unwrap();
        assert_eq!(user.name, "Zoé");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut roster = UserRoster::new();
        let a = roster.add("Jane Smith", "👩‍💼").unwrap().id.clone();
        let b = roster.add("Jane Smith", "👩‍🔬").unwrap().id.clone();
        assert_ne!(a, b);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_find_by_id() {
        let mut roster = UserRoster::new();
        let id = roster.add("Bob Johnson", "👨‍🚀").unwrap().id.clone();
        assert_eq!(roster.find(&id).unwrap().name, "Bob Johnson");
        assert!(roster.find(&UserId::from("missing")).is_none());
    }
}
