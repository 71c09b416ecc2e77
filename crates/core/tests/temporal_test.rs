//! Tests for the month-based situation resolver.

use catasto_core::Situation;
use catasto_core::registry::SituationStatus;
use catasto_core::temporal::resolve;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn situation(from: NaiveDate, status: SituationStatus, value: f64) -> Situation {
    Situation {
        effective_from: Some(from),
        status: Some(status),
        category: Some("A/2".to_string()),
        value: Some(value),
        ..Default::default()
    }
}

fn resolved_value(target: NaiveDate, situations: &[Situation]) -> Option<f64> {
    resolve(target, situations).and_then(|s| s.value)
}

#[test]
fn test_rectification_covers_proposal_period() {
    let situations = vec![
        situation(date(2020, 3, 10), SituationStatus::Rectified, 3.0),
        situation(date(2019, 5, 1), SituationStatus::Proposed, 2.0),
        situation(date(2010, 1, 1), SituationStatus::Validated, 1.0),
    ];

    let chosen = resolve(date(2020, 1, 1), &situations).unwrap();
    assert_eq!(chosen.status, Some(SituationStatus::Rectified));
    assert_eq!(chosen.value, Some(3.0));

    assert_eq!(resolved_value(date(2019, 4, 1), &situations), Some(1.0));
    assert_eq!(resolved_value(date(2021, 1, 1), &situations), Some(3.0));
}

#[test]
fn test_same_month_rectification_of_proposal() {
    let situations = vec![
        situation(date(2020, 1, 10), SituationStatus::Rectified, 2.0),
        situation(date(2020, 1, 1), SituationStatus::Proposed, 1.0),
    ];

    let chosen = resolve(date(2020, 1, 1), &situations).unwrap();
    assert_eq!(chosen.status, Some(SituationStatus::Rectified));
    assert!(resolve(date(2019, 12, 1), &situations).is_none());
}

#[test]
fn test_nothing_in_force_before_first_change() {
    let situations = vec![situation(date(2020, 1, 1), SituationStatus::Validated, 1.0)];

    assert!(resolve(date(2019, 12, 1), &situations).is_none());
    assert_eq!(resolved_value(date(2020, 1, 1), &situations), Some(1.0));
}

#[test]
fn test_undated_situation_never_keeps_month() {
    let situations = vec![
        situation(date(2015, 1, 1), SituationStatus::Validated, 1000.0),
        Situation {
            value: Some(9000.0),
            ..Default::default()
        },
    ];

    let chosen = resolve(date(2015, 1, 1), &situations).unwrap();
    assert_eq!(chosen.effective_from, Some(date(2015, 1, 1)));
    assert_eq!(chosen.value, Some(1000.0));
}

#[test]
fn test_empty_history() {
    assert!(resolve(date(2020, 1, 1), &[]).is_none());
}

#[test]
fn test_cutover_day() {
    let late = vec![
        situation(date(2020, 3, 20), SituationStatus::Validated, 2.0),
        situation(date(2015, 1, 1), SituationStatus::Validated, 1.0),
    ];
    assert_eq!(resolved_value(date(2020, 2, 1), &late), Some(1.0));
    assert_eq!(resolved_value(date(2020, 3, 1), &late), Some(2.0));

    let early = vec![
        situation(date(2020, 3, 15), SituationStatus::Validated, 2.0),
        situation(date(2015, 1, 1), SituationStatus::Validated, 1.0),
    ];
    assert_eq!(resolved_value(date(2020, 3, 1), &early), Some(1.0));
    assert_eq!(resolved_value(date(2020, 4, 1), &early), Some(2.0));

    let boundary = vec![
        situation(date(2020, 3, 16), SituationStatus::Validated, 2.0),
        situation(date(2015, 1, 1), SituationStatus::Validated, 1.0),
    ];
    assert_eq!(resolved_value(date(2020, 3, 1), &boundary), Some(2.0));
}

#[test]
fn test_early_change_without_predecessor() {
    let situations = vec![situation(date(2020, 3, 5), SituationStatus::Validated, 1.0)];
    assert_eq!(resolved_value(date(2020, 3, 1), &situations), Some(1.0));
}

#[test]
fn test_only_year_and_month_matter() {
    let situations = vec![
        situation(date(2020, 3, 20), SituationStatus::Validated, 2.0),
        situation(date(2015, 1, 1), SituationStatus::Validated, 1.0),
    ];
    assert_eq!(
        resolved_value(date(2020, 3, 1), &situations),
        resolved_value(date(2020, 3, 31), &situations)
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let situations = vec![
        situation(date(2010, 1, 1), SituationStatus::Validated, 1.0),
        situation(date(2020, 3, 10), SituationStatus::Rectified, 3.0),
        situation(date(2019, 5, 1), SituationStatus::Proposed, 2.0),
    ];
    assert_eq!(resolved_value(date(2020, 1, 1), &situations), Some(3.0));
}

#[test]
fn test_consecutive_proposals_collapse() {
    let situations = vec![
        situation(date(2021, 1, 1), SituationStatus::Proposed, 3.0),
        situation(date(2020, 1, 1), SituationStatus::Proposed, 2.0),
        situation(date(2010, 1, 1), SituationStatus::Validated, 1.0),
    ];

    assert_eq!(resolved_value(date(2020, 6, 1), &situations), Some(1.0));
    assert_eq!(resolved_value(date(2021, 6, 1), &situations), Some(3.0));
}

#[test]
fn test_undated_situations_ignored() {
    let situations = vec![
        Situation {
            value: Some(9.0),
            ..Default::default()
        },
        situation(date(2015, 1, 1), SituationStatus::Validated, 1.0),
    ];
    assert_eq!(resolved_value(date(2020, 1, 1), &situations), Some(1.0));
}
