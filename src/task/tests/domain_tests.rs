//! Unit tests for task domain validation and parsing.

use crate::project::domain::ProjectId;
use crate::task::domain::{
    NewTask, ParseTaskPriorityError, ParseTaskStatusError, TaskDescription, TaskDomainError,
    TaskId, TaskLabels, TaskPriority, TaskStatus, TaskTitle,
};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case(0)]
#[case(-7)]
fn task_id_rejects_non_positive_values(#[case] value: i64) {
    assert_eq!(TaskId::new(value), Err(TaskDomainError::InvalidTaskId(value)));
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Login form  ").expect("valid title");
    assert_eq!(title.as_str(), "Login form");
}

#[rstest]
fn title_rejects_blank_text() {
    assert_eq!(TaskTitle::new("   "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_rejects_over_long_text() {
    let long = "t".repeat(TaskTitle::MAX_LENGTH + 1);
    assert_eq!(
        TaskTitle::new(long),
        Err(TaskDomainError::TitleTooLong {
            max: 100,
            length: 101,
        })
    );
}

#[rstest]
fn description_is_kept_verbatim() {
    let text = "As a user I want to log in with email and password\n";
    let description = TaskDescription::new(text).expect("valid description");
    assert_eq!(description.as_str(), text);
}

#[rstest]
#[case("")]
#[case(" \n\t")]
fn description_rejects_blank_text(#[case] text: &str) {
    assert_eq!(
        TaskDescription::new(text),
        Err(TaskDomainError::EmptyDescription)
    );
}

#[rstest]
fn description_rejects_over_long_text() {
    let long = "d".repeat(TaskDescription::MAX_LENGTH + 1);
    assert!(matches!(
        TaskDescription::new(long),
        Err(TaskDomainError::DescriptionTooLong { max: 500, .. })
    ));
}

#[rstest]
fn labels_drop_blanks_and_repeats_in_order() {
    let labels = TaskLabels::new(vec![
        " auth ".to_owned(),
        String::new(),
        "ui".to_owned(),
        "auth".to_owned(),
    ]);
    assert_eq!(labels.as_slice(), ["auth".to_owned(), "ui".to_owned()]);
}

#[rstest]
#[case("backlog", TaskStatus::Backlog)]
#[case("In-Progress", TaskStatus::InProgress)]
#[case("in_progress", TaskStatus::InProgress)]
#[case("ready to test", TaskStatus::ReadyToTest)]
#[case(" done ", TaskStatus::Done)]
fn status_parses_tolerantly(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn status_round_trips_through_canonical_text() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn status_rejects_unknown_text() {
    assert_eq!(
        TaskStatus::try_from("archived"),
        Err(ParseTaskStatusError("archived".to_owned()))
    );
}

#[rstest]
#[case("LOW", TaskPriority::Low)]
#[case("urgent", TaskPriority::Urgent)]
fn priority_parses_case_insensitively(#[case] raw: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_text() {
    assert_eq!(
        TaskPriority::try_from("critical"),
        Err(ParseTaskPriorityError("critical".to_owned()))
    );
}

#[rstest]
fn status_serializes_as_kebab_case() {
    let json = serde_json::to_string(&TaskStatus::ReadyToTest).expect("serialize");
    assert_eq!(json, "\"ready-to-test\"");
}

#[rstest]
fn new_task_defaults_to_backlog_and_medium(clock: DefaultClock) {
    let before = Utc::now();
    let task = NewTask::new(
        ProjectId::new(3).expect("valid project id"),
        TaskTitle::new("Login").expect("valid title"),
        TaskDescription::new("Sign in").expect("valid description"),
        &clock,
    );
    let after = Utc::now();

    assert_eq!(task.status, TaskStatus::Backlog);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.labels.is_empty());
    assert!(task.due_date.is_none());
    assert!(task.created_at >= before && task.created_at <= after);
}
