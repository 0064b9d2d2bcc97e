use taskflow_core::{EntityId, Priority, TaskServiceError, TaskStatus, TaskTracker};

struct Fixture {
    tracker: TaskTracker,
    owner_id: EntityId,
    member_id: EntityId,
    project_id: EntityId,
}

fn fixture() -> Fixture {
    let mut tracker = TaskTracker::new();
    let owner_id = tracker
        .users()
        .register_user("Owner", "owner@example.com", Some("admin"))
        .unwrap()
        .id
        .unwrap();
    let member_id = tracker
        .users()
        .register_user("Member", "member@example.com", None)
        .unwrap()
        .id
        .unwrap();
    let project_id = tracker
        .projects()
        .create_project("Core", "domain work", owner_id)
        .unwrap()
        .id
        .unwrap();
    Fixture {
        tracker,
        owner_id,
        member_id,
        project_id,
    }
}

#[test]
fn create_task_starts_new_and_unassigned() {
    let mut fx = fixture();
    let task = fx
        .tracker
        .tasks()
        .create_task("Write tests", "cover services", fx.project_id, Priority::default())
        .unwrap();

    assert_eq!(task.id, Some(1));
    assert_eq!(task.project_id, fx.project_id);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.status, TaskStatus::New);
    assert_eq!(task.assignee_id, None);
    assert_eq!(fx.tracker.tasks().get_task(1), Some(task));
}

#[test]
fn create_task_validates_project_then_title() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();

    assert_eq!(
        tasks.create_task("", "", 404, Priority::Low).unwrap_err(),
        TaskServiceError::ProjectNotFound(404)
    );
    assert_eq!(
        tasks
            .create_task("  ", "", fx.project_id, Priority::Low)
            .unwrap_err(),
        TaskServiceError::InvalidTitle
    );
    assert!(fx.tracker.task_store().is_empty());
}

#[test]
fn task_ids_come_from_the_task_store_counter() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();
    let first = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap();
    let second = tasks
        .create_task("b", "", fx.project_id, Priority::Critical)
        .unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(second.priority, Priority::Critical);
}

#[test]
fn assign_task_overwrites_previous_assignee() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();
    let task_id = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap()
        .id
        .unwrap();

    tasks.assign_task(task_id, fx.member_id).unwrap();
    assert_eq!(tasks.get_task(task_id).unwrap().assignee_id, Some(fx.member_id));

    tasks.assign_task(task_id, fx.owner_id).unwrap();
    assert_eq!(tasks.get_task(task_id).unwrap().assignee_id, Some(fx.owner_id));
}

#[test]
fn assign_task_reports_missing_task_before_missing_user() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();
    let task_id = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap()
        .id
        .unwrap();

    assert_eq!(
        tasks.assign_task(50, 60).unwrap_err(),
        TaskServiceError::TaskNotFound(50)
    );
    assert_eq!(
        tasks.assign_task(task_id, 60).unwrap_err(),
        TaskServiceError::UserNotFound(60)
    );
    assert_eq!(tasks.get_task(task_id).unwrap().assignee_id, None);
}

#[test]
fn any_status_is_reachable_from_any_status() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();
    let task_id = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap()
        .id
        .unwrap();

    for from in TaskStatus::ALL {
        for to in TaskStatus::ALL {
            tasks.update_task_status(task_id, from).unwrap();
            tasks.update_task_status(task_id, to).unwrap();
            assert_eq!(tasks.get_task(task_id).unwrap().status, to);
        }
    }
}

#[test]
fn completed_task_can_go_back_to_new() {
    let mut fx = fixture();
    let mut tasks = fx.tracker.tasks();
    let task_id = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap()
        .id
        .unwrap();

    tasks.update_task_status(task_id, TaskStatus::Completed).unwrap();
    tasks.update_task_status(task_id, TaskStatus::New).unwrap();
    assert_eq!(tasks.get_task(task_id).unwrap().status, TaskStatus::New);
}

#[test]
fn update_status_of_missing_task_fails() {
    let mut fx = fixture();
    assert_eq!(
        fx.tracker
            .tasks()
            .update_task_status(3, TaskStatus::InReview)
            .unwrap_err(),
        TaskServiceError::TaskNotFound(3)
    );
}

#[test]
fn queries_return_empty_for_unknown_keys() {
    let mut fx = fixture();
    let tasks = fx.tracker.tasks();

    assert!(tasks.get_tasks_by_project(fx.project_id).is_empty());
    assert!(tasks.get_tasks_by_project(12345).is_empty());
    assert!(tasks.get_tasks_by_user(12345).is_empty());
    assert!(tasks.get_task(1).is_none());
}

#[test]
fn queries_filter_by_project_user_and_status() {
    let mut fx = fixture();
    let other_project = fx
        .tracker
        .projects()
        .create_project("Other", "", fx.member_id)
        .unwrap()
        .id
        .unwrap();

    let mut tasks = fx.tracker.tasks();
    let a = tasks
        .create_task("a", "", fx.project_id, Priority::Low)
        .unwrap()
        .id
        .unwrap();
    let b = tasks
        .create_task("b", "", fx.project_id, Priority::High)
        .unwrap()
        .id
        .unwrap();
    let c = tasks
        .create_task("c", "", other_project, Priority::Medium)
        .unwrap()
        .id
        .unwrap();
    tasks.assign_task(a, fx.member_id).unwrap();
    tasks.assign_task(c, fx.member_id).unwrap();
    tasks.update_task_status(b, TaskStatus::InProgress).unwrap();

    let ids = |list: Vec<taskflow_core::Task>| -> Vec<EntityId> {
        list.into_iter().filter_map(|task| task.id).collect()
    };
    assert_eq!(ids(tasks.get_tasks_by_project(fx.project_id)), vec![a, b]);
    assert_eq!(ids(tasks.get_tasks_by_project(other_project)), vec![c]);
    assert_eq!(ids(tasks.get_tasks_by_user(fx.member_id)), vec![a, c]);
    assert!(tasks.get_tasks_by_user(fx.owner_id).is_empty());
    assert_eq!(ids(tasks.get_tasks_by_status(TaskStatus::InProgress)), vec![b]);
    assert_eq!(ids(tasks.get_tasks_by_status(TaskStatus::New)), vec![a, c]);
}
