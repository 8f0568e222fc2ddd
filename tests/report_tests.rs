mod common;

use common::{date, setup_test_store, time, ts};
use pontolog::core::calculator::{PayRates, sum_month};
use pontolog::core::clock::ClockLogic;
use pontolog::core::report::{ReportLogic, default_month, distinct_months, selectable_months};
use pontolog::errors::AppError;
use pontolog::models::{DayRecord, MonthKey};
use pontolog::store::RecordStore;

fn month(s: &str) -> MonthKey {
    s.parse().expect("valid month")
}

fn closed(d: &str, hours: f64, pay: f64) -> DayRecord {
    let mut r = DayRecord::open(date(d), time("09:00:00"));
    r.clock_out = Some(time("17:00:00"));
    r.hours_worked = Some(hours);
    r.pay_amount = Some(pay);
    r
}

#[test]
fn test_totals_for_month() {
    let records = vec![
        closed("2024-03-01", 7.0, 210.0),
        closed("2024-03-04", 6.5, 195.0),
    ];

    let t = sum_month(&records, month("2024-03"));
    assert_eq!(t.total_hours, 13.5);
    assert_eq!(t.total_pay, 405.0);
    assert_eq!(t.days, 2);
    assert_eq!(t.open_days, 0);

    let none = sum_month(&records, month("2024-04"));
    assert_eq!(none.total_hours, 0.0);
    assert_eq!(none.total_pay, 0.0);
    assert_eq!(none.days, 0);
}

#[test]
fn test_totals_only_count_matching_month_and_treat_open_as_zero() {
    let records = vec![
        closed("2024-02-28", 8.0, 240.0),
        closed("2024-03-01", 7.0, 210.0),
        DayRecord::open(date("2024-03-02"), time("09:00:00")),
        closed("2024-04-01", 5.0, 150.0),
        closed("2024-03-03", 0.1, 3.0),
        closed("2024-03-04", 0.2, 6.0),
    ];

    for m in ["2024-02", "2024-03", "2024-04", "2024-05"] {
        let key = month(m);
        let expected_hours: f64 = records
            .iter()
            .filter(|r| r.month_key == key)
            .map(|r| r.hours_worked.unwrap_or(0.0))
            .sum();
        let t = sum_month(&records, key);
        assert!((t.total_hours - expected_hours).abs() < 1e-9, "{m}");
    }

    let march = sum_month(&records, month("2024-03"));
    // rounded to two decimals (0.1 + 0.2 + 7.0)
    assert_eq!(march.total_hours, 7.3);
    assert_eq!(march.total_pay, 219.0);
    assert_eq!(march.days, 4);
    assert_eq!(march.open_days, 1);
}

#[test]
fn test_report_totals_from_store() {
    let store = RecordStore::new(setup_test_store("report_totals"));
    let rates = PayRates::default();
    for at in [
        "2024-03-01 09:00:00",
        "2024-03-01 17:00:00",
        "2024-03-02 09:00:00",
        "2024-03-02 16:30:00",
    ] {
        ClockLogic::clock_event(&store, ts(at), &rates).expect("clock event");
    }

    let t = ReportLogic::totals(&store, month("2024-03")).expect("totals");
    assert_eq!(t.total_hours, 13.5);
    assert_eq!(t.total_pay, 405.0);

    let empty = ReportLogic::totals(&store, month("2024-04")).expect("totals");
    assert_eq!((empty.total_hours, empty.total_pay), (0.0, 0.0));

    let rows = ReportLogic::records_for(&store, month("2024-03")).expect("records");
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_months_in_first_appearance_order() {
    let records = vec![
        closed("2024-03-01", 7.0, 210.0),
        closed("2024-01-05", 7.0, 210.0),
        closed("2024-03-09", 7.0, 210.0),
        closed("2024-02-01", 7.0, 210.0),
    ];

    let months: Vec<String> = distinct_months(&records).iter().map(|m| m.to_string()).collect();
    assert_eq!(months, vec!["2024-03", "2024-01", "2024-02"]);
    assert_eq!(default_month(&records, month("2030-01")), month("2024-03"));
}

#[test]
fn test_months_fallback_when_empty() {
    let fallback = month("2025-07");
    assert_eq!(selectable_months(&[], fallback), vec![fallback]);
    assert_eq!(default_month(&[], fallback), fallback);

    let store = RecordStore::new(setup_test_store("report_months_empty"));
    let months = ReportLogic::months(&store).expect("months");
    assert_eq!(months.len(), 1);
}

#[test]
fn test_month_key_parsing() {
    assert_eq!(month("2024-03").to_string(), "2024-03");
    assert_eq!(month(" 2024-12 ").month(), 12);

    for bad in ["2024-3", "2024-13", "2024-00", "24-03", "2024/03", "abcd-ef", ""] {
        assert!(
            matches!(bad.parse::<MonthKey>(), Err(AppError::InvalidMonth(_))),
            "{bad:?} should be rejected"
        );
    }
}
