use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use todue::config::{load_config, write_default_config};
use todue::domain::{
    classify, classify_with, format_calendar_date, parse_display_date, ClockStyle, TaskDraft,
    TaskRow, WeekRule,
};
use todue::{AppConfig, CalendarDate, DeadlineFilter, FormatError, TaskId, TaskRepository, TimeOfDay};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

fn repo_with(dates: &[(&str, CalendarDate)]) -> TaskRepository {
    let mut repo = TaskRepository::new();
    let noon = TimeOfDay::from_hm(12, 0).unwrap();
    for (title, on) in dates {
        repo.add_task(TaskDraft::new(*title, *on, noon));
    }
    repo
}

fn ids(values: &[u64]) -> BTreeSet<TaskId> {
    values.iter().copied().map(TaskId).collect()
}

#[test]
fn today_keeps_only_tasks_due_on_the_current_date() {
    let repo = repo_with(&[("A", date(2024, 3, 15)), ("B", date(2024, 3, 16))]);

    let visible = classify(DeadlineFilter::Today, date(2024, 3, 15), repo.tasks());

    assert_eq!(visible, ids(&[1]));
}

#[test]
fn this_week_groups_the_first_days_of_2024() {
    let repo = repo_with(&[("Kickoff", date(2024, 1, 3))]);

    let visible = classify(DeadlineFilter::ThisWeek, date(2024, 1, 1), repo.tasks());

    assert_eq!(visible, ids(&[1]));
}

#[test]
fn all_and_completed_ignore_the_date() {
    let mut repo = repo_with(&[
        ("Past", date(2020, 6, 1)),
        ("Now", date(2024, 3, 15)),
        ("Later", date(2031, 12, 31)),
    ]);
    repo.toggle_completed(TaskId(1)).unwrap();
    repo.toggle_completed(TaskId(3)).unwrap();
    let today = date(2024, 3, 15);

    assert_eq!(classify(DeadlineFilter::All, today, repo.tasks()), ids(&[1, 2, 3]));
    assert_eq!(classify(DeadlineFilter::Completed, today, repo.tasks()), ids(&[1, 3]));
}

#[test]
fn completed_tasks_still_count_as_due_today() {
    let mut repo = repo_with(&[("Done already", date(2024, 3, 15))]);
    repo.toggle_completed(TaskId(1)).unwrap();

    let visible = classify(DeadlineFilter::Today, date(2024, 3, 15), repo.tasks());

    assert_eq!(visible, ids(&[1]));
}

#[test]
fn legacy_this_week_matches_the_same_week_of_another_year() {
    let repo = repo_with(&[("Last year", date(2023, 3, 15))]);

    let visible = classify(DeadlineFilter::ThisWeek, date(2024, 3, 15), repo.tasks());

    assert_eq!(visible, ids(&[1]));
}

#[test]
fn week_rule_decides_weeks_that_span_new_year() {
    let repo = repo_with(&[("Wrap up", date(2024, 12, 30))]);
    let today = date(2025, 1, 1);

    let legacy = classify_with(WeekRule::Legacy, DeadlineFilter::ThisWeek, today, repo.tasks());
    let iso = classify_with(WeekRule::Iso8601, DeadlineFilter::ThisWeek, today, repo.tasks());

    assert_eq!(legacy, BTreeSet::new());
    assert_eq!(iso, ids(&[1]));
}

#[test]
fn rows_with_unreadable_dates_only_show_under_all() {
    let rows = vec![
        TaskRow {
            id: TaskId(7),
            date_text: "15/03/2024".to_string(),
            completed: false,
        },
        TaskRow {
            id: TaskId(8),
            date_text: "15-03-2024".to_string(),
            completed: false,
        },
    ];
    let today = date(2024, 3, 15);

    assert_eq!(classify(DeadlineFilter::All, today, &rows), ids(&[7, 8]));
    assert_eq!(classify(DeadlineFilter::Today, today, &rows), ids(&[7]));
    assert_eq!(classify(DeadlineFilter::ThisWeek, today, &rows), ids(&[7]));
}

#[test]
fn display_dates_keep_their_zero_padding() {
    let parsed = parse_display_date("05/09/2024").unwrap();

    assert_eq!(parsed, date(2024, 9, 5));
    assert_eq!(format_calendar_date(parsed), "05/09/2024");
}

#[test]
fn iso_formatted_text_is_not_a_display_date() {
    let err = parse_display_date("2024-09-05").unwrap_err();

    assert!(matches!(err, FormatError::FieldCount { .. }));
}

#[test]
fn clock_styles_disagree_only_around_midnight_and_noon() {
    let midnight = TimeOfDay::from_hm(0, 15).unwrap();
    let noon = TimeOfDay::from_hm(12, 15).unwrap();
    let evening = TimeOfDay::from_hm(18, 5).unwrap();

    assert_eq!(ClockStyle::Standard.format_time(midnight), "12:15 AM");
    assert_eq!(ClockStyle::Legacy.format_time(midnight), "0:15 AM");
    assert_eq!(ClockStyle::Standard.format_time(noon), "12:15 PM");
    assert_eq!(ClockStyle::Legacy.format_time(noon), "12:15 AM");
    assert_eq!(ClockStyle::Standard.format_time(evening), "6:05 PM");
    assert_eq!(ClockStyle::Legacy.format_time(evening), "6:05 PM");
}

#[test]
fn visible_tasks_follow_insertion_order_after_edits() {
    let mut repo = repo_with(&[
        ("First", date(2024, 3, 15)),
        ("Second", date(2024, 4, 1)),
        ("Third", date(2024, 3, 15)),
    ]);
    let noon = TimeOfDay::from_hm(12, 0).unwrap();
    repo.update_task(TaskId(2), TaskDraft::new("Second", date(2024, 3, 15), noon))
        .unwrap();
    repo.remove_task(TaskId(1)).unwrap();

    let titles: Vec<&str> = repo
        .visible(DeadlineFilter::Today, date(2024, 3, 15), WeekRule::Legacy)
        .into_iter()
        .map(|task| task.title.as_str())
        .collect();

    assert_eq!(titles, vec!["Second", "Third"]);
    assert_eq!(repo.next_id(), TaskId(4));
}

#[test]
fn default_config_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todue").join("config.json");

    write_default_config(&path).unwrap();

    assert_eq!(load_config(&path).unwrap(), AppConfig::default());
    assert!(write_default_config(&path).is_err());
}
