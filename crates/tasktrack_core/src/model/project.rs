//! Project domain model.
//!
//! # Responsibility
//! - Own the ordered task list of one project.
//! - Track team membership by user id.
//! - Render the per-project task listing.
//!
//! # Invariants
//! - Tasks and members keep insertion order.
//! - Appends are unconditional; duplicates are not rejected.

use crate::model::task::Task;
use crate::model::user::{UserId, UserLookup};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Project identifier. Not the registry key; see `TaskManager::add_project`.
pub type ProjectId = String;

/// Named container of tasks and team members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    deadline: NaiveDate,
    members: Vec<UserId>,
    tasks: Vec<Task>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            deadline,
            members: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Member user ids in insertion order.
    pub fn members(&self) -> &[UserId] {
        self.members.as_slice()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// First task with the given id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn add_member(&mut self, user_id: impl Into<UserId>) {
        self.members.push(user_id.into());
    }

    /// Writes the header line followed by one indented line per task.
    pub fn write_tasks<L, W>(&self, users: &L, out: &mut W) -> io::Result<()>
    where
        L: UserLookup + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out, "Tasks for project: {}", self.name)?;
        for task in &self.tasks {
            writeln!(out, "  {}", task.display(users))?;
        }
        Ok(())
    }

    /// Same as [`Project::write_tasks`] on standard output.
    pub fn list_tasks<L: UserLookup + ?Sized>(&self, users: &L) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_tasks(users, &mut handle)
    }
}
