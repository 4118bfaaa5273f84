//! User domain model.
//!
//! # Responsibility
//! - Define the identity record shared by every kind of user.
//! - Render the one-line summary used by reports.
//!
//! # Invariants
//! - `id` is fixed at construction; there is no setter for it.
//! - Managers are built through [`User::manager`], which pins `role` to
//!   [`MANAGER_ROLE`].
//! - Inputs are not validated; empty or duplicate ids are accepted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Registry key for users.
pub type UserId = String;

/// Role literal assigned to every manager.
pub const MANAGER_ROLE: &str = "Manager";

/// Variant-specific payload on top of the shared identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserProfile {
    /// Regular team member. Display shows the role.
    Employee,
    /// Team lead. Display shows the department instead of the role.
    Manager { department: String },
}

/// Identity and display record for a tracked person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    role: String,
    email: String,
    profile: UserProfile,
}

impl User {
    /// Creates an employee-profile user.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            email: email.into(),
            profile: UserProfile::Employee,
        }
    }

    /// Creates a manager. Role is always [`MANAGER_ROLE`].
    pub fn manager(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: MANAGER_ROLE.to_string(),
            email: email.into(),
            profile: UserProfile::Manager {
                department: department.into(),
            },
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Department for managers, `None` for employees.
    pub fn department(&self) -> Option<&str> {
        match &self.profile {
            UserProfile::Manager { department } => Some(department.as_str()),
            UserProfile::Employee => None,
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self.profile, UserProfile::Manager { .. })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the role. A manager's display is unaffected because it
    /// shows the department.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// One-line human-readable summary.
    pub fn display(&self) -> String {
        match &self.profile {
            UserProfile::Employee => format!(
                "User: {} | Role: {} | Email: {}",
                self.name, self.role, self.email
            ),
            UserProfile::Manager { department } => format!(
                "Manager: {} | Dept: {} | Email: {}",
                self.name, department, self.email
            ),
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display().as_str())
    }
}

/// Read-only user resolution used when rendering assignees.
pub trait UserLookup {
    fn find_user(&self, id: &str) -> Option<&User>;
}

impl UserLookup for [User] {
    fn find_user(&self, id: &str) -> Option<&User> {
        self.iter().find(|user| user.id() == id)
    }
}
