use rworkhours::core::calculator::intervals::{
    interval_duration, minutes_within, overlaps, validate_all, validate_interval,
};
use rworkhours::errors::{AppError, CalculationError};
use rworkhours::models::break_interval::BreakInterval;
use rworkhours::models::break_list::BreakList;

mod common;
use common::{brk, t};

#[test]
fn test_duration_clamps_and_ignores_partial() {
    assert_eq!(interval_duration(Some(t("12:00")), Some(t("12:45"))), 45);
    assert_eq!(interval_duration(Some(t("12:00")), Some(t("11:00"))), 0);
    assert_eq!(interval_duration(Some(t("12:00")), None), 0);
    assert_eq!(interval_duration(None, Some(t("12:00"))), 0);
    assert_eq!(brk(1, "10:00", "10:20").duration_minutes(), 20);
}

#[test]
fn test_overlapping_breaks_fail() {
    let all = vec![brk(1, "09:00", "10:00"), brk(2, "09:30", "10:30")];
    assert_eq!(
        validate_interval(&all[0], &all, 0),
        Err(CalculationError::Overlap(1))
    );
    assert_eq!(
        validate_interval(&all[1], &all, 1),
        Err(CalculationError::Overlap(2))
    );
}

#[test]
fn test_touching_breaks_are_fine() {
    let all = vec![brk(1, "09:00", "10:00"), brk(2, "10:00", "11:00")];
    assert!(validate_all(&all).is_empty());
    assert!(!overlaps((t("09:00"), t("10:00")), (t("10:00"), t("11:00"))));
}

#[test]
fn test_reversed_break_fails_order_on_its_own() {
    let all = vec![brk(7, "10:00", "09:00")];
    assert_eq!(
        validate_interval(&all[0], &all, 0),
        Err(CalculationError::Order(7))
    );

    let zero = vec![brk(3, "10:00", "10:00")];
    assert_eq!(validate_all(&zero), vec![CalculationError::Order(3)]);
}

#[test]
fn test_order_takes_precedence_over_overlap() {
    // reversed and inside break 1
    let all = vec![brk(1, "09:00", "12:00"), brk(2, "11:00", "10:00")];
    assert_eq!(
        validate_interval(&all[1], &all, 1),
        Err(CalculationError::Order(2))
    );
}

#[test]
fn test_partial_breaks_are_not_validated() {
    let all = vec![
        brk(1, "09:00", "10:00"),
        BreakInterval::new(2, Some(t("09:30")), None),
        BreakInterval::new(3, None, Some(t("09:45"))),
        BreakInterval::empty(4),
    ];
    assert!(validate_all(&all).is_empty());
}

#[test]
fn test_identical_ids_compare_by_position() {
    let all = vec![brk(1, "09:00", "10:00"), brk(1, "09:00", "10:00")];
    assert_eq!(validate_all(&all).len(), 2);
}

#[test]
fn test_minutes_within_window() {
    let all = vec![brk(1, "10:00", "10:30"), brk(2, "12:00", "13:00")];
    assert_eq!(minutes_within(&all, t("09:00"), t("10:15")), 15);
    assert_eq!(minutes_within(&all, t("09:00"), t("12:30")), 60);
    assert_eq!(minutes_within(&all, t("14:00"), t("15:00")), 0);
}

#[test]
fn test_break_list_starts_with_one_empty_slot() {
    let list = BreakList::new();
    assert_eq!(list.len(), 1);
    assert_eq!(list.first_empty(), Some(1));
}

#[test]
fn test_break_list_from_pairs_fills_initial_slot() {
    let list = BreakList::from_pairs(vec![
        (Some(t("10:00")), Some(t("10:15"))),
        (Some(t("12:00")), None),
        (None, Some(t("16:00"))),
    ]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1).unwrap().duration_minutes(), 15);
    assert_eq!(list.get(2).unwrap().start, Some(t("12:00")));
    assert_eq!(list.get(3).unwrap().end, Some(t("16:00")));
    assert_eq!(list.first_empty(), None);

    let empty = BreakList::from_pairs(Vec::new());
    assert_eq!(empty, BreakList::new());
    assert_eq!(empty.first_empty(), Some(1));
}

#[test]
fn test_break_list_ids_are_monotonic() {
    let mut list = BreakList::new();
    let a = list.add();
    let b = list.add();
    list.remove(a).unwrap();
    let c = list.add();
    assert!(a < b && b < c);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_break_list_edits_in_place() {
    let mut list = BreakList::new();
    list.set_start(1, Some(t("12:00"))).unwrap();
    list.set_end(1, Some(t("12:30"))).unwrap();
    let b = list.get(1).unwrap();
    assert_eq!(b.duration_minutes(), 30);
    assert!(b.is_complete());

    assert!(matches!(
        list.set_end(99, None),
        Err(AppError::UnknownBreak(99))
    ));
}

#[test]
fn test_removing_last_break_is_rejected() {
    let mut list = BreakList::new();
    assert!(matches!(list.remove(1), Err(AppError::LastBreak)));
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());

    let id = list.add();
    assert!(list.remove(1).is_ok());
    assert!(matches!(list.remove(id), Err(AppError::LastBreak)));
    assert!(matches!(list.remove(42), Err(AppError::UnknownBreak(42))));
    assert!(!list.is_empty());
}
