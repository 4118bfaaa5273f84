use tasktrack_core::{parse_date, Task, TaskStatus, User};

fn directory() -> Vec<User> {
    vec![User::new("U1", "Alice", "Developer", "alice@company.com")]
}

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("T1", "Design Homepage", "Create modern responsive homepage");

    assert_eq!(task.id(), "T1");
    assert_eq!(task.title(), "Design Homepage");
    assert_eq!(task.description(), "Create modern responsive homepage");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.assignee(), None);
    assert_eq!(task.deadline(), None);
}

#[test]
fn fresh_task_display_uses_fallback_labels() {
    let task = Task::new("T1", "Design Homepage", "desc");
    let line = task.display(directory().as_slice());

    assert!(line.contains("Unassigned"));
    assert!(line.contains("N/A"));
    assert_eq!(
        line,
        "Task[T1]: Design Homepage | Status: TODO | Assigned: Unassigned | Deadline: N/A"
    );
}

#[test]
fn assigned_task_display_resolves_name_and_formats_deadline() {
    let mut task = Task::new("T1", "Design Homepage", "desc");
    task.set_assignee(&directory()[0]);
    task.set_deadline(Some(parse_date("2025-09-20").unwrap()));
    task.set_status(TaskStatus::InProgress);

    assert_eq!(
        task.display(directory().as_slice()),
        "Task[T1]: Design Homepage | Status: IN_PROGRESS | Assigned: Alice | Deadline: 2025-09-20"
    );
}

#[test]
fn setting_done_twice_is_idempotent() {
    let mut task = Task::new("T1", "Design Homepage", "desc");
    task.set_status(TaskStatus::Done);
    task.set_status(TaskStatus::Done);
    assert_eq!(task.status(), TaskStatus::Done);
    assert!(task.is_done());
}

#[test]
fn status_transitions_are_unconstrained() {
    let mut task = Task::new("T1", "Design Homepage", "desc");
    task.set_status(TaskStatus::Done);
    task.set_status(TaskStatus::Todo);
    assert_eq!(task.status(), TaskStatus::Todo);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("T2", "Write Unit Tests", "Ensure code coverage for backend");
    task.set_assignee(&User::new("U2", "Bob", "Tester", "bob@company.com"));
    task.set_status(TaskStatus::InProgress);
    task.set_deadline(Some(parse_date("2025-10-01").unwrap()));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "T2");
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["assignee"]["id"], "U2");
    assert_eq!(json["assignee"]["name"], "Bob");
    assert_eq!(json["deadline"], "2025-10-01");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
