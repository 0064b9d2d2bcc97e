use taskflow_core::{
    EntityId, Priority, ProjectServiceError, TaskStatus, TaskTracker, PROJECT_STATUS_ACTIVE,
};

fn register(tracker: &mut TaskTracker, name: &str, role: Option<&str>) -> EntityId {
    tracker
        .users()
        .register_user(name, format!("{name}@example.com"), role)
        .unwrap()
        .id
        .unwrap()
}

#[test]
fn create_project_sets_defaults() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);

    let project = tracker
        .projects()
        .create_project("Website", "", owner)
        .unwrap();
    assert_eq!(project.id, Some(1));
    assert_eq!(project.owner_id, owner);
    assert_eq!(project.status, PROJECT_STATUS_ACTIVE);
    assert!(project.description.is_empty());
    assert!(project.created_at > 0);
}

#[test]
fn create_project_with_unknown_owner_leaves_store_unchanged() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    tracker.projects().create_project("Kept", "", owner).unwrap();

    let err = tracker
        .projects()
        .create_project("Orphan", "", 99)
        .unwrap_err();
    assert_eq!(err, ProjectServiceError::UserNotFound(99));
    assert_eq!(tracker.project_store().len(), 1);
}

#[test]
fn owner_is_checked_before_name() {
    let mut tracker = TaskTracker::new();
    let err = tracker.projects().create_project("  ", "", 5).unwrap_err();
    assert_eq!(err, ProjectServiceError::UserNotFound(5));
}

#[test]
fn blank_project_name_is_rejected() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);

    for name in ["", "   ", "\t\n"] {
        let err = tracker
            .projects()
            .create_project(name, "desc", owner)
            .unwrap_err();
        assert_eq!(err, ProjectServiceError::InvalidName);
    }
    assert!(tracker.project_store().is_empty());
}

#[test]
fn projects_by_owner_lists_only_their_projects() {
    let mut tracker = TaskTracker::new();
    let ann = register(&mut tracker, "ann", None);
    let bob = register(&mut tracker, "bob", None);
    let mut projects = tracker.projects();
    projects.create_project("A1", "", ann).unwrap();
    projects.create_project("B1", "", bob).unwrap();
    projects.create_project("A2", "", ann).unwrap();

    let owned: Vec<_> = projects
        .get_projects_by_owner(ann)
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(owned, vec!["A1".to_string(), "A2".to_string()]);
    assert_eq!(projects.get_all_projects().len(), 3);
}

#[test]
fn delete_by_non_owner_member_is_forbidden() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let stranger = register(&mut tracker, "stranger", None);
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();

    let err = tracker
        .projects()
        .delete_project(project_id, stranger)
        .unwrap_err();
    assert_eq!(
        err,
        ProjectServiceError::Forbidden {
            project_id,
            user_id: stranger,
        }
    );
    assert!(tracker.projects().get_project(project_id).is_some());
}

#[test]
fn delete_by_member_owner_succeeds() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", Some("member"));
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();

    tracker.projects().delete_project(project_id, owner).unwrap();
    assert!(tracker.projects().get_project(project_id).is_none());
}

#[test]
fn delete_by_admin_non_owner_succeeds() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let admin = register(&mut tracker, "admin", Some("admin"));
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();

    tracker.projects().delete_project(project_id, admin).unwrap();
    assert!(tracker.projects().get_project(project_id).is_none());
}

#[test]
fn delete_checks_project_then_user() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();

    assert_eq!(
        tracker.projects().delete_project(42, 77).unwrap_err(),
        ProjectServiceError::ProjectNotFound(42)
    );
    assert_eq!(
        tracker.projects().delete_project(project_id, 77).unwrap_err(),
        ProjectServiceError::UserNotFound(77)
    );
}

#[test]
fn delete_leaves_tasks_in_place() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();
    tracker
        .tasks()
        .create_task("t", "", project_id, Priority::Low)
        .unwrap();

    tracker.projects().delete_project(project_id, owner).unwrap();

    let orphans = tracker.tasks().get_tasks_by_project(project_id);
    assert_eq!(orphans.len(), 1);
    assert_eq!(
        tracker.projects().get_project_progress(project_id).unwrap_err(),
        ProjectServiceError::ProjectNotFound(project_id)
    );
}

#[test]
fn progress_is_zero_for_empty_project_and_errors_for_unknown() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let project_id = tracker
        .projects()
        .create_project("Empty", "", owner)
        .unwrap()
        .id
        .unwrap();

    assert_eq!(tracker.projects().get_project_progress(project_id), Ok(0.0));
    assert_eq!(
        tracker.projects().get_project_progress(project_id + 1),
        Err(ProjectServiceError::ProjectNotFound(project_id + 1))
    );
}

#[test]
fn progress_tracks_status_changes_and_is_stable() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();

    let mut task_ids = Vec::new();
    for idx in 0..4 {
        let task = tracker
            .tasks()
            .create_task(format!("task {idx}"), "", project_id, Priority::Medium)
            .unwrap();
        task_ids.push(task.id.unwrap());
    }

    let steps = [
        (task_ids[0], TaskStatus::Completed, 25.0),
        (task_ids[1], TaskStatus::Completed, 50.0),
        (task_ids[2], TaskStatus::InReview, 50.0),
        (task_ids[0], TaskStatus::InProgress, 25.0),
        (task_ids[2], TaskStatus::Completed, 50.0),
        (task_ids[3], TaskStatus::Completed, 75.0),
        (task_ids[0], TaskStatus::Completed, 100.0),
    ];
    for (task_id, status, expected) in steps {
        tracker.tasks().update_task_status(task_id, status).unwrap();
        let first = tracker.projects().get_project_progress(project_id).unwrap();
        let second = tracker.projects().get_project_progress(project_id).unwrap();
        assert!((first - expected).abs() < 1e-9, "expected {expected}, got {first}");
        assert_eq!(first, second);
    }
}

#[test]
fn progress_handles_fractional_percentages() {
    let mut tracker = TaskTracker::new();
    let owner = register(&mut tracker, "owner", None);
    let project_id = tracker
        .projects()
        .create_project("P", "", owner)
        .unwrap()
        .id
        .unwrap();
    let mut tasks = tracker.tasks();
    let done = tasks.create_task("a", "", project_id, Priority::Low).unwrap();
    tasks.create_task("b", "", project_id, Priority::Low).unwrap();
    tasks.create_task("c", "", project_id, Priority::Low).unwrap();
    tasks
        .update_task_status(done.id.unwrap(), TaskStatus::Completed)
        .unwrap();

    let progress = tracker.projects().get_project_progress(project_id).unwrap();
    assert!((progress - 100.0 / 3.0).abs() < 1e-9);
}
