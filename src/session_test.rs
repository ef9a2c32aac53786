use serde_json::json;
use time::Month;

use super::*;

fn today() -> Date {
    Date::from_calendar_date(2026, Month::March, 7).unwrap()
}

fn record(body: Value) -> SessionRecord {
    SessionRecord::from_payload(&IncomingPayload::from_json(body), today())
}

// =========================================================================
// title
// =========================================================================

#[test]
fn title_joins_label_and_session() {
    assert_eq!(record(json!({ "label": "Focus", "session": 3 })).title, "Focus — #3");
}

#[test]
fn title_defaults_to_pomodoro() {
    assert_eq!(record(json!({})).title, "Pomodoro");
}

#[test]
fn title_uses_default_label_with_session() {
    assert_eq!(record(json!({ "session": 2 })).title, "Pomodoro — #2");
}

#[test]
fn title_accepts_text_session() {
    assert_eq!(record(json!({ "label": "Deep work", "session": "4b" })).title, "Deep work — #4b");
}

#[test]
fn title_omits_zero_or_empty_session() {
    assert_eq!(record(json!({ "label": "Focus", "session": 0 })).title, "Focus");
    assert_eq!(record(json!({ "label": "Focus", "session": "" })).title, "Focus");
    assert_eq!(record(json!({ "label": "Focus", "session": null })).title, "Focus");
}

#[test]
fn empty_label_falls_back_to_default() {
    assert_eq!(record(json!({ "label": "" })).title, "Pomodoro");
}

#[test]
fn integral_float_session_prints_without_fraction() {
    assert_eq!(record(json!({ "session": 5.0 })).title, "Pomodoro — #5");
    assert_eq!(record(json!({ "session": 1.5 })).title, "Pomodoro — #1.5");
}

// =========================================================================
// duration
// =========================================================================

#[test]
fn duration_passes_numbers_through() {
    assert_eq!(record(json!({ "duration": 10 })).duration, Number::from(10));
}

#[test]
fn duration_keeps_zero_and_fractions() {
    assert_eq!(record(json!({ "duration": 0 })).duration, Number::from(0));
    assert_eq!(record(json!({ "duration": 12.5 })).duration.as_f64(), Some(12.5));
}

#[test]
fn duration_defaults_when_missing_or_not_numeric() {
    assert_eq!(record(json!({})).duration, Number::from(25));
    assert_eq!(record(json!({ "duration": "x" })).duration, Number::from(25));
    assert_eq!(record(json!({ "duration": "10" })).duration, Number::from(25));
    assert_eq!(record(json!({ "duration": null })).duration, Number::from(25));
}

// =========================================================================
// date, category, completion
// =========================================================================

#[test]
fn date_defaults_to_today() {
    assert_eq!(record(json!({})).date, "2026-03-07");
}

#[test]
fn date_passes_through_when_present() {
    assert_eq!(record(json!({ "date": "2025-12-31" })).date, "2025-12-31");
}

#[test]
fn category_defaults_to_work_and_passes_through_unknown_values() {
    assert_eq!(record(json!({})).category, "Work");
    assert_eq!(record(json!({ "type": "Break" })).category, "Break");
}

#[test]
fn completed_at_defaults_to_empty() {
    assert_eq!(record(json!({})).completed_at, "");
    assert_eq!(record(json!({ "completedAt": "14:25" })).completed_at, "14:25");
}

#[test]
fn non_object_body_gets_all_defaults() {
    for body in [json!(42), json!([1, 2]), json!(null), json!("text")] {
        let rec = record(body);
        assert_eq!(rec.title, "Pomodoro");
        assert_eq!(rec.duration, Number::from(25));
        assert_eq!(rec.category, "Work");
    }
}

#[test]
fn iso_date_formats_year_month_day() {
    let date = Date::from_calendar_date(2025, Month::December, 31).unwrap();
    assert_eq!(iso_date(date), "2025-12-31");
}

#[test]
fn iso_date_pads_month_and_day() {
    let date = Date::from_calendar_date(987, Month::January, 2).unwrap();
    assert_eq!(iso_date(date), "0987-01-02");
}
