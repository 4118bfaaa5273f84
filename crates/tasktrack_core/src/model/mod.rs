//! Domain model for users, tasks and projects.
//!
//! # Responsibility
//! - Define the plain in-memory records the task manager operates on.
//! - Own the human-readable line formats used by listings and reports.
//!
//! # Invariants
//! - Models hold no back-references; tasks refer to users by id only.

pub mod date;
pub mod project;
pub mod task;
pub mod user;
