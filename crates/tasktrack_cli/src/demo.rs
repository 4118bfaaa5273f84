//! Fixed demo sequence.
//!
//! Builds three users, one project with two tasks, walks one task to DONE
//! and prints the project listing, a completion report and a display line
//! for the manager.

use serde::Serialize;
use std::error::Error;
use std::io::Write;
use tasktrack_core::{parse_date, Project, Task, TaskManager, TaskStatus, User};

pub const DEMO_PROJECT: &str = "Website Revamp";

/// Registry contents as written by `--snapshot`.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub users: Vec<&'a User>,
    pub projects: Vec<&'a Project>,
}

/// Runs the demo, writing all report output to `out`.
///
/// # Errors
/// - Date literal parse failures and output write failures propagate.
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<TaskManager, Box<dyn Error>> {
    let mut manager = TaskManager::new();

    let alice = User::new("U1", "Alice", "Developer", "alice@company.com");
    let bob = User::new("U2", "Bob", "Tester", "bob@company.com");
    let charlie = User::manager("M1", "Charlie", "charlie@company.com", "IT");

    manager.add_user(alice.clone());
    manager.add_user(bob.clone());
    manager.add_user(charlie.clone());

    let mut project = Project::new("P1", DEMO_PROJECT, parse_date("2025-12-31")?);
    project.add_member(alice.id());
    project.add_member(bob.id());
    project.add_member(charlie.id());
    project.add_task(Task::new(
        "T1",
        "Design Homepage",
        "Create modern responsive homepage",
    ));
    project.add_task(Task::new(
        "T2",
        "Write Unit Tests",
        "Ensure code coverage for backend",
    ));
    manager.add_project(project);

    manager.assign_task_with_deadline(DEMO_PROJECT, "T1", &alice, parse_date("2025-09-20")?)?;
    manager.assign_task(DEMO_PROJECT, "T2", &bob)?;

    manager.update_status(DEMO_PROJECT, "T1", TaskStatus::InProgress)?;
    manager.update_status(DEMO_PROJECT, "T1", TaskStatus::Done)?;

    manager.write_project_tasks(DEMO_PROJECT, out)?;
    manager.write_completed_by_user(alice.id(), out)?;

    let any_user: &User = &charlie;
    writeln!(out, "Polymorphism check -> {}", any_user.display())?;

    Ok(manager)
}

/// Captures the registry for JSON output. Users are sorted by id.
pub fn snapshot(manager: &TaskManager) -> Snapshot<'_> {
    let mut users = manager.users();
    users.sort_by(|left, right| left.id().cmp(right.id()));
    Snapshot {
        users,
        projects: manager.projects(),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, snapshot, DEMO_PROJECT};
    use tasktrack_core::TaskStatus;

    const EXPECTED: &str = "\
Tasks for project: Website Revamp
  Task[T1]: Design Homepage | Status: DONE | Assigned: Alice | Deadline: 2025-09-20
  Task[T2]: Write Unit Tests | Status: TODO | Assigned: Bob | Deadline: N/A
Tasks completed by Alice:
  Task[T1]: Design Homepage | Status: DONE | Assigned: Alice | Deadline: 2025-09-20
Polymorphism check -> Manager: Charlie | Dept: IT | Email: charlie@company.com
";

    #[test]
    fn demo_prints_expected_transcript() {
        let mut out = Vec::new();
        let manager = run(&mut out).expect("demo should run");

        assert_eq!(String::from_utf8(out).expect("utf-8 output"), EXPECTED);
        let t1 = manager
            .task(DEMO_PROJECT, "T1")
            .expect("T1 should be registered");
        assert_eq!(t1.status(), TaskStatus::Done);
    }

    #[test]
    fn snapshot_serializes_users_and_projects() {
        let mut out = Vec::new();
        let manager = run(&mut out).expect("demo should run");

        let json = serde_json::to_value(snapshot(&manager)).expect("snapshot should serialize");
        assert_eq!(json["users"][0]["id"], "M1");
        assert_eq!(json["users"][0]["profile"]["kind"], "manager");
        assert_eq!(json["projects"][0]["name"], DEMO_PROJECT);
        assert_eq!(json["projects"][0]["tasks"][0]["status"], "DONE");
        assert_eq!(json["projects"][0]["tasks"][0]["deadline"], "2025-09-20");
        assert_eq!(json["projects"][0]["members"][2], "M1");
    }
}
