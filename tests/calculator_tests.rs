use rworkhours::config::InputPolicy;
use rworkhours::core::calculator::minutes::{coerce_component, to_minutes};
use rworkhours::core::logic::Core;
use rworkhours::errors::{AppError, CalculationError};
use rworkhours::models::break_interval::BreakInterval;
use rworkhours::models::calculation::{CalculationInput, Mode};
use rworkhours::utils::time::{format_minutes, parse_duration};

mod common;
use common::{brk, t};

fn simple(login: Option<&str>, target: i64, gross: i64, effective: i64) -> CalculationInput {
    CalculationInput {
        login: login.map(t),
        target_minutes: target,
        mode: Mode::Simple {
            gross_minutes: gross,
            effective_minutes: effective,
        },
    }
}

fn breaks(login: &str, target: i64, list: Vec<BreakInterval>) -> CalculationInput {
    CalculationInput {
        login: Some(t(login)),
        target_minutes: target,
        mode: Mode::Breaks(list),
    }
}

#[test]
fn test_to_minutes_in_range() {
    for h in [0, 1, 8, 23, 40] {
        for m in [0, 1, 30, 59] {
            assert_eq!(to_minutes(h, m), h * 60 + m);
        }
    }
}

#[test]
fn test_to_minutes_clamps_out_of_range() {
    assert_eq!(to_minutes(-2, 10), 10);
    assert_eq!(to_minutes(1, 75), 119);
    assert_eq!(to_minutes(1, -5), 60);
}

#[test]
fn test_to_minutes_saturates_huge_hours() {
    assert_eq!(to_minutes(i64::MAX, 59), i64::MAX);
    assert_eq!(to_minutes(200_000_000_000_000_000, 0), i64::MAX);
    assert_eq!(coerce_component("99999999999999999999999"), i64::MAX);
}

#[test]
fn test_huge_hours_clamp_policy_saturates() {
    let huge = parse_duration("200000000000000000h", InputPolicy::Clamp).unwrap();
    assert_eq!(huge, i64::MAX);

    let big = parse_duration("2000000000000000h", InputPolicy::Clamp).unwrap();
    assert_eq!(big, 2_000_000_000_000_000 * 60);

    // simple mode with enormous gross/effective totals
    let r = Core::calculate(&simple(Some("09:00"), 480, big, big), t("10:00")).unwrap();
    assert_eq!(r.break_minutes, 0);
    assert_eq!(r.remaining_minutes, 0);
    assert_eq!(r.progress_percent, 100);

    let r = Core::calculate(&simple(Some("09:00"), huge, huge, 0), t("10:00")).unwrap();
    assert_eq!(r.required_minutes, i64::MAX);
    assert_eq!(r.progress_percent, 0);

    // breaks mode with an enormous target
    let input = breaks("09:00", huge, vec![brk(1, "12:00", "12:30")]);
    let r = Core::calculate(&input, t("12:00")).unwrap();
    assert_eq!(r.required_minutes, i64::MAX);
    assert_eq!(r.remaining_minutes, huge - 180);
}

#[test]
fn test_huge_hours_reject_policy_fails() {
    assert!(matches!(
        parse_duration("200000000000000000h", InputPolicy::Reject),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        parse_duration("99999999999999999999999h", InputPolicy::Reject),
        Err(AppError::InvalidDuration(_))
    ));
    assert_eq!(
        parse_duration("2000000000000000h", InputPolicy::Reject).unwrap(),
        2_000_000_000_000_000 * 60
    );
}

#[test]
fn test_coerce_component_like_a_form_field() {
    assert_eq!(coerce_component("8"), 8);
    assert_eq!(coerce_component("12x"), 12);
    assert_eq!(coerce_component("abc"), 0);
    assert_eq!(coerce_component(""), 0);
    assert_eq!(coerce_component("-3"), -3);
}

#[test]
fn test_simple_scenario_from_form_defaults() {
    // login 09:00, total 8h1m, gross 9h, effective 8h
    let input = simple(Some("09:00"), 481, 540, 480);
    let r = Core::calculate(&input, t("12:00")).expect("valid input");

    assert_eq!(format_minutes(r.break_minutes), "1h 0m");
    assert_eq!(format_minutes(r.remaining_minutes), "0h 1m");
    assert_eq!(r.logout, t("18:01"));
    assert_eq!(r.required_minutes, 541);
    assert_eq!(r.mode, "simple");
}

#[test]
fn test_simple_effective_exceeds_gross() {
    let input = simple(Some("09:00"), 480, 300, 301);
    let errs = Core::calculate(&input, t("12:00")).unwrap_err();
    assert_eq!(errs, vec![CalculationError::EffectiveExceedsGross]);
}

#[test]
fn test_simple_break_is_exact_difference() {
    for (gross, eff) in [(0, 0), (540, 480), (600, 1), (90, 90)] {
        let r = Core::calculate(&simple(Some("08:00"), 480, gross, eff), t("08:00")).unwrap();
        assert_eq!(r.break_minutes, gross - eff);
    }
}

#[test]
fn test_simple_remaining_never_negative() {
    let r = Core::calculate(&simple(Some("08:00"), 480, 600, 540), t("08:00")).unwrap();
    assert_eq!(r.remaining_minutes, 0);
    assert_eq!(r.progress_percent, 100);
    assert_eq!(r.logout, t("18:00"));
}

#[test]
fn test_missing_login_short_circuits() {
    let errs = Core::calculate(&simple(None, 480, 100, 200), t("12:00")).unwrap_err();
    assert_eq!(errs, vec![CalculationError::MissingLoginTime]);

    let mut input = breaks("09:00", 480, vec![brk(1, "10:00", "09:00")]);
    input.login = None;
    let errs = Core::calculate(&input, t("12:00")).unwrap_err();
    assert_eq!(errs, vec![CalculationError::MissingLoginTime]);
}

#[test]
fn test_breaks_scenario_single_lunch() {
    let input = breaks("09:00", 480, vec![brk(1, "12:00", "12:30")]);
    let r = Core::calculate(&input, t("09:00")).expect("valid input");

    assert_eq!(r.break_minutes, 30);
    assert_eq!(r.required_minutes, 510);
    assert_eq!(r.logout, t("17:30"));
    assert_eq!(r.intervals.len(), 1);
    assert!(r.intervals[0].valid);
    assert_eq!(r.intervals[0].duration_minutes, 30);
}

#[test]
fn test_breaks_partial_interval_is_ignored() {
    let input = breaks(
        "09:00",
        480,
        vec![
            brk(1, "12:00", "12:30"),
            BreakInterval::new(2, Some(t("15:00")), None),
        ],
    );
    let r = Core::calculate(&input, t("09:00")).unwrap();
    assert_eq!(r.break_minutes, 30);
    assert!(!r.intervals[1].valid);
    assert_eq!(r.intervals[1].duration_minutes, 0);
}

#[test]
fn test_breaks_errors_are_aggregated_without_projection() {
    let input = breaks(
        "09:00",
        480,
        vec![
            brk(1, "09:00", "10:00"),
            brk(2, "09:30", "10:30"),
            brk(3, "16:00", "15:00"),
        ],
    );
    let errs = Core::calculate(&input, t("12:00")).unwrap_err();
    assert_eq!(
        errs,
        vec![
            CalculationError::Overlap(1),
            CalculationError::Overlap(2),
            CalculationError::Order(3),
        ]
    );
}

#[test]
fn test_breaks_live_progress_uses_injected_now() {
    let input = breaks("09:00", 480, vec![brk(1, "12:00", "12:30")]);

    // lunch fully taken
    let r = Core::calculate(&input, t("13:15")).unwrap();
    assert_eq!(r.worked_minutes, 255 - 30);

    // half of the lunch taken
    let r = Core::calculate(&input, t("12:15")).unwrap();
    assert_eq!(r.worked_minutes, 195 - 15);
    assert_eq!(r.remaining_minutes, 480 - 180);
    assert_eq!(r.progress_percent, 37);

    // before login nothing is worked
    let r = Core::calculate(&input, t("08:00")).unwrap();
    assert_eq!(r.worked_minutes, 0);
    assert_eq!(r.remaining_minutes, 480);
    assert_eq!(r.progress_percent, 0);

    // logout does not depend on now
    assert_eq!(r.logout, t("17:30"));
}

#[test]
fn test_progress_clamped_and_zero_target() {
    let input = breaks("09:00", 60, vec![BreakInterval::empty(1)]);
    let r = Core::calculate(&input, t("18:00")).unwrap();
    assert_eq!(r.progress_percent, 100);
    assert_eq!(r.remaining_minutes, 0);

    let input = breaks("09:00", 0, vec![BreakInterval::empty(1)]);
    let r = Core::calculate(&input, t("09:00")).unwrap();
    assert_eq!(r.progress_percent, 100);
    assert_eq!(r.logout, t("09:00"));
}

#[test]
fn test_logout_wraps_past_midnight() {
    let input = breaks("20:00", 480, vec![brk(1, "22:00", "22:45")]);
    let r = Core::calculate(&input, t("21:00")).unwrap();
    assert_eq!(r.required_minutes, 525);
    assert_eq!(r.logout, t("04:45"));

    let r = Core::calculate(&simple(Some("23:30"), 60, 30, 30), t("00:00")).unwrap();
    assert_eq!(r.logout, t("00:30"));
}

#[test]
fn test_calculate_is_idempotent() {
    let input = breaks(
        "08:30",
        450,
        vec![brk(1, "10:00", "10:15"), brk(2, "12:30", "13:15")],
    );
    let now = t("14:07");
    let a = Core::calculate(&input, now);
    let b = Core::calculate(&input, now);
    assert_eq!(a, b);

    let s = simple(Some("08:30"), 481, 540, 480);
    assert_eq!(Core::calculate(&s, now), Core::calculate(&s, now));
}
