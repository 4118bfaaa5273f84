//! Project registry contract and in-memory implementation.
//!
//! # Invariants
//! - Projects are keyed by display name, not by `Project::id`. Two projects
//!   sharing a name collide and the later insert wins.
//! - Iteration order is name order, so reports are deterministic.

use crate::model::project::Project;
use std::collections::BTreeMap;

/// Registry of projects keyed by name.
pub trait ProjectRepository {
    /// Inserts or replaces the project under its name.
    fn upsert_project(&mut self, project: Project) -> Option<Project>;
    fn get_project(&self, name: &str) -> Option<&Project>;
    fn get_project_mut(&mut self, name: &str) -> Option<&mut Project>;
    /// All projects in repository iteration order.
    fn list_projects(&self) -> Vec<&Project>;
}

/// `BTreeMap`-backed project registry.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: BTreeMap<String, Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn upsert_project(&mut self, project: Project) -> Option<Project> {
        self.projects.insert(project.name().to_string(), project)
    }

    fn get_project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    fn get_project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.get_mut(name)
    }

    fn list_projects(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryProjectRepository, ProjectRepository};
    use crate::model::project::Project;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid ymd")
    }

    #[test]
    fn list_projects_is_name_ordered() {
        let mut repo = InMemoryProjectRepository::new();
        repo.upsert_project(Project::new("P2", "Zeta", date(2025, 1, 1)));
        repo.upsert_project(Project::new("P1", "Alpha", date(2025, 1, 1)));

        let names: Vec<&str> = repo.list_projects().into_iter().map(Project::name).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn same_name_replaces_previous_project() {
        let mut repo = InMemoryProjectRepository::new();
        repo.upsert_project(Project::new("P1", "Website Revamp", date(2025, 12, 31)));
        let displaced = repo
            .upsert_project(Project::new("P2", "Website Revamp", date(2026, 6, 30)))
            .expect("collision should displace the first project");

        assert_eq!(displaced.id(), "P1");
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.get_project("Website Revamp").map(Project::id),
            Some("P2")
        );
    }
}
