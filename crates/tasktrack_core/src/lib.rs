//! Core domain logic for tasktrack.
//! This crate is the single source of truth for the tracking model.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{format_date, parse_date, DateParseError};
pub use model::project::{Project, ProjectId};
pub use model::task::{Assignee, Task, TaskId, TaskStatus};
pub use model::user::{User, UserId, UserLookup, UserProfile, MANAGER_ROLE};
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository};
pub use repo::user_repo::{InMemoryUserRepository, UserRepository};
pub use service::task_manager::{
    CompletedReport, TaskManager, TaskManagerError, TaskManagerResult,
};
