//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Keep the CLI decoupled from collection details.

pub mod task_manager;
