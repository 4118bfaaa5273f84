//! Task domain model.
//!
//! # Responsibility
//! - Hold one work item with its status, assignee and deadline.
//! - Render the task line used by project listings and reports.
//!
//! # Invariants
//! - New tasks start as [`TaskStatus::Todo`] with no assignee or deadline.
//! - Status transitions are unconstrained; any value may be set at any time.
//! - The assignee is an id plus the name seen at assignment time, never an
//!   owned `User`. It may name a user that no registry knows about.

use crate::model::date::format_date;
use crate::model::user::{User, UserId, UserLookup};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable task identifier.
pub type TaskId = String;

const UNASSIGNED_LABEL: &str = "Unassigned";
const NO_DEADLINE_LABEL: &str = "N/A";

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// Stable label used in task lines and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key for the assigned user plus the name it had when assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: UserId,
    pub name: String,
}

impl From<&User> for Assignee {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
        }
    }
}

/// One work item inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    assignee: Option<Assignee>,
    deadline: Option<NaiveDate>,
}

impl Task {
    /// Creates a task with a caller-provided id.
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Todo,
            assignee: None,
            deadline: None,
        }
    }

    /// Creates a task with a freshly generated UUID v4 id.
    pub fn generate(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), title, description)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Id of the assigned user, if any.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_ref().map(|assignee| assignee.id.as_str())
    }

    /// Name recorded when the task was assigned.
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|assignee| assignee.name.as_str())
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn set_assignee(&mut self, user: &User) {
        self.assignee = Some(Assignee::from(user));
    }

    pub fn clear_assignee(&mut self) {
        self.assignee = None;
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee() == Some(user_id)
    }

    /// Renders the one-line task summary.
    ///
    /// The assignee name is resolved through `users` so renames show up; an
    /// id the lookup does not know prints the name recorded at assignment.
    pub fn display<L: UserLookup + ?Sized>(&self, users: &L) -> String {
        let assigned = match &self.assignee {
            None => UNASSIGNED_LABEL,
            Some(assignee) => users
                .find_user(assignee.id.as_str())
                .map_or(assignee.name.as_str(), |user| user.name()),
        };
        let deadline = self
            .deadline
            .map_or_else(|| NO_DEADLINE_LABEL.to_string(), format_date);
        format!(
            "Task[{}]: {} | Status: {} | Assigned: {} | Deadline: {}",
            self.id, self.title, self.status, assigned, deadline
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskStatus};
    use crate::model::user::User;

    #[test]
    fn generated_ids_are_unique() {
        let first = Task::generate("a", "b");
        let second = Task::generate("a", "b");
        assert_ne!(first.id(), second.id());
        assert_eq!(first.status(), TaskStatus::Todo);
    }

    #[test]
    fn display_uses_recorded_name_for_unregistered_assignee() {
        let users: Vec<User> = Vec::new();
        let mut task = Task::new("T9", "Orphan", "assignee not registered");
        task.set_assignee(&User::new("X1", "Xavier", "Contractor", "x@elsewhere.com"));

        let line = task.display(users.as_slice());
        assert!(line.contains("Assigned: Xavier"), "unexpected line: {line}");
        assert!(!line.contains("X1"));
    }

    #[test]
    fn display_prefers_registry_name_over_recorded_name() {
        let mut alice = User::new("U1", "Alice", "Developer", "alice@company.com");
        let mut task = Task::new("T1", "Design Homepage", "desc");
        task.set_assignee(&alice);
        alice.set_name("Alicia");

        let users = vec![alice];
        assert!(task.display(users.as_slice()).contains("Assigned: Alicia"));
        assert_eq!(task.assignee_name(), Some("Alice"));
    }

    #[test]
    fn clear_assignee_restores_unassigned_label() {
        let users = vec![User::new("U1", "Alice", "Developer", "alice@company.com")];
        let mut task = Task::new("T1", "Design Homepage", "desc");
        task.set_assignee(&users[0]);
        assert!(task.display(users.as_slice()).contains("Assigned: Alice"));

        task.clear_assignee();
        assert!(task.display(users.as_slice()).contains("Assigned: Unassigned"));
    }

    #[test]
    fn status_labels_match_wire_names() {
        assert_eq!(TaskStatus::Todo.to_string(), "TODO");
        assert_eq!(TaskStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(TaskStatus::Done.to_string(), "DONE");
    }
}
