//! Task manager use-case service.
//!
//! # Responsibility
//! - Own the user and project registries for one tracking session.
//! - Provide assignment, status update and reporting entry points.
//!
//! # Invariants
//! - Assignment and status updates are unconditional once the task is
//!   located; the assigned user does not have to be registered.
//! - Reports for unknown users or projects produce no output and no error.
//! - Project keys are names; see `repo::project_repo`.

use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::model::user::User;
use crate::repo::project_repo::{InMemoryProjectRepository, ProjectRepository};
use crate::repo::user_repo::{InMemoryUserRepository, UserRepository};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

pub type TaskManagerResult<T> = Result<T, TaskManagerError>;

/// Errors from task manager operations.
#[derive(Debug)]
pub enum TaskManagerError {
    /// No project is registered under this name.
    ProjectNotFound(String),
    /// The project exists but holds no task with this id.
    TaskNotFound { project: String, task: String },
    /// Writing report output failed.
    Io(io::Error),
}

impl Display for TaskManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(name) => write!(f, "project not found: {name}"),
            Self::TaskNotFound { project, task } => {
                write!(f, "task not found: {task} in project {project}")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TaskManagerError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Completed-work report for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedReport {
    /// Display name of the reported user.
    pub user_name: String,
    /// Rendered task lines, project order then task insertion order.
    pub lines: Vec<String>,
}

impl CompletedReport {
    /// Writes the header followed by one indented line per task.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Tasks completed by {}:", self.user_name)?;
        for line in &self.lines {
            writeln!(out, "  {line}")?;
        }
        Ok(())
    }
}

/// Central registry plus orchestration for users, projects and tasks.
pub struct TaskManager<U = InMemoryUserRepository, P = InMemoryProjectRepository> {
    users: U,
    projects: P,
}

impl TaskManager {
    /// Creates an empty manager backed by in-memory registries.
    pub fn new() -> Self {
        Self::with_repositories(
            InMemoryUserRepository::new(),
            InMemoryProjectRepository::new(),
        )
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: UserRepository, P: ProjectRepository> TaskManager<U, P> {
    /// Creates a manager over caller-provided registries.
    pub fn with_repositories(users: U, projects: P) -> Self {
        Self { users, projects }
    }

    /// Registers a user, replacing any user with the same id.
    pub fn add_user(&mut self, user: User) -> Option<User> {
        debug!("event=user_added module=task_manager user_id={}", user.id());
        self.users.upsert_user(user)
    }

    /// Registers a project under its **name**.
    ///
    /// A project already registered under that name is replaced and returned,
    /// even when the two ids differ.
    pub fn add_project(&mut self, project: Project) -> Option<Project> {
        let name = project.name().to_string();
        let project_id = project.id().to_string();
        let displaced = self.projects.upsert_project(project);
        match &displaced {
            Some(previous) if previous.id() != project_id => warn!(
                "event=project_name_collision module=task_manager name={} kept_id={} dropped_id={}",
                name,
                project_id,
                previous.id()
            ),
            _ => debug!(
                "event=project_added module=task_manager name={} project_id={}",
                name, project_id
            ),
        }
        displaced
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get_user(id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_user_mut(id)
    }

    pub fn users(&self) -> Vec<&User> {
        self.users.list_users()
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get_project(name)
    }

    pub fn project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.get_project_mut(name)
    }

    /// Projects in registry iteration order.
    pub fn projects(&self) -> Vec<&Project> {
        self.projects.list_projects()
    }

    /// User registry, usable wherever a `UserLookup` is expected.
    pub fn user_lookup(&self) -> &U {
        &self.users
    }

    /// Locates a task by project name and task id.
    pub fn task(&self, project_name: &str, task_id: &str) -> TaskManagerResult<&Task> {
        let project = self
            .projects
            .get_project(project_name)
            .ok_or_else(|| TaskManagerError::ProjectNotFound(project_name.to_string()))?;
        project
            .task(task_id)
            .ok_or_else(|| TaskManagerError::TaskNotFound {
                project: project_name.to_string(),
                task: task_id.to_string(),
            })
    }

    fn task_mut(&mut self, project_name: &str, task_id: &str) -> TaskManagerResult<&mut Task> {
        let project = self
            .projects
            .get_project_mut(project_name)
            .ok_or_else(|| TaskManagerError::ProjectNotFound(project_name.to_string()))?;
        project
            .task_mut(task_id)
            .ok_or_else(|| TaskManagerError::TaskNotFound {
                project: project_name.to_string(),
                task: task_id.to_string(),
            })
    }

    /// Assigns a task to `user` without touching its deadline.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` when the task cannot be located.
    pub fn assign_task(
        &mut self,
        project_name: &str,
        task_id: &str,
        user: &User,
    ) -> TaskManagerResult<()> {
        let task = self.task_mut(project_name, task_id)?;
        task.set_assignee(user);
        info!(
            "event=task_assigned module=task_manager project={} task_id={} user_id={}",
            project_name,
            task_id,
            user.id()
        );
        Ok(())
    }

    /// Assigns a task to `user` and sets its deadline.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` when the task cannot be located.
    pub fn assign_task_with_deadline(
        &mut self,
        project_name: &str,
        task_id: &str,
        user: &User,
        deadline: NaiveDate,
    ) -> TaskManagerResult<()> {
        let task = self.task_mut(project_name, task_id)?;
        task.set_assignee(user);
        task.set_deadline(Some(deadline));
        info!(
            "event=task_assigned module=task_manager project={} task_id={} user_id={} deadline={}",
            project_name,
            task_id,
            user.id(),
            deadline
        );
        Ok(())
    }

    /// Sets task status. Any transition is accepted.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` when the task cannot be located.
    pub fn update_status(
        &mut self,
        project_name: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> TaskManagerResult<()> {
        let task = self.task_mut(project_name, task_id)?;
        let previous = task.status();
        task.set_status(status);
        info!(
            "event=task_status_updated module=task_manager project={} task_id={} from={} to={}",
            project_name, task_id, previous, status
        );
        Ok(())
    }

    /// Collects DONE tasks assigned to `user_id` across all projects.
    ///
    /// Returns `None` when the user is not registered.
    pub fn completed_by_user(&self, user_id: &str) -> Option<CompletedReport> {
        let user = self.users.get_user(user_id)?;
        let lines = self
            .projects
            .list_projects()
            .into_iter()
            .flat_map(|project| project.tasks().iter())
            .filter(|task| task.is_assigned_to(user_id) && task.is_done())
            .map(|task| task.display(&self.users))
            .collect();
        Some(CompletedReport {
            user_name: user.name().to_string(),
            lines,
        })
    }

    /// Writes the completed-work report for `user_id`.
    ///
    /// Unknown users write nothing and succeed.
    pub fn write_completed_by_user<W: Write + ?Sized>(
        &self,
        user_id: &str,
        out: &mut W,
    ) -> TaskManagerResult<()> {
        match self.completed_by_user(user_id) {
            Some(report) => report.write_to(out)?,
            None => debug!(
                "event=report_skipped module=task_manager reason=user_not_found user_id={}",
                user_id
            ),
        }
        Ok(())
    }

    /// Same as [`TaskManager::write_completed_by_user`] on standard output.
    pub fn report_completed_by_user(&self, user_id: &str) -> TaskManagerResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_completed_by_user(user_id, &mut handle)
    }

    /// Writes the task listing for the named project.
    ///
    /// Unknown project names write nothing and succeed.
    pub fn write_project_tasks<W: Write + ?Sized>(
        &self,
        project_name: &str,
        out: &mut W,
    ) -> TaskManagerResult<()> {
        match self.projects.get_project(project_name) {
            Some(project) => project.write_tasks(&self.users, out)?,
            None => debug!(
                "event=listing_skipped module=task_manager reason=project_not_found name={}",
                project_name
            ),
        }
        Ok(())
    }

    /// Same as [`TaskManager::write_project_tasks`] on standard output.
    pub fn show_project_tasks(&self, project_name: &str) -> TaskManagerResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_project_tasks(project_name, &mut handle)
    }
}
