//! User registry contract and in-memory implementation.

use crate::model::user::{User, UserId, UserLookup};
use std::collections::HashMap;

/// Registry of users keyed by id.
pub trait UserRepository: UserLookup {
    /// Inserts or replaces the user under its id.
    fn upsert_user(&mut self, user: User) -> Option<User>;
    fn get_user(&self, id: &str) -> Option<&User>;
    fn get_user_mut(&mut self, id: &str) -> Option<&mut User>;
    /// All users, in unspecified order.
    fn list_users(&self) -> Vec<&User>;
}

/// `HashMap`-backed user registry.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: HashMap<UserId, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserLookup for InMemoryUserRepository {
    fn find_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn upsert_user(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id().to_string(), user)
    }

    fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    fn get_user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    fn list_users(&self) -> Vec<&User> {
        self.users.values().collect()
    }
}
