//! Registry storage contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define the lookup/insert contracts the task manager depends on.
//! - Keep collection choices out of service orchestration.
//!
//! # Invariants
//! - Inserts overwrite an existing entry under the same key and hand the
//!   displaced value back to the caller.
//! - Nothing is persisted; contents live as long as the owning value.

pub mod project_repo;
pub mod user_repo;
