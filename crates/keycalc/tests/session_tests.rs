//! End-to-end session tests: key sequences in, display text out.

use keycalc::prelude::*;

fn run(keys: &str) -> Session {
    let mut session = Session::new();
    session.press_keys(keys).unwrap();
    session
}

// ===== Digit and decimal entry =====

#[test]
fn test_leading_zeros_collapse() {
    assert_eq!(run("005").display(), "5");
}

#[test]
fn test_double_decimal_keeps_one_point() {
    assert_eq!(run("1..5").display(), "1.5");
}

#[test]
fn test_long_entry_appends() {
    assert_eq!(run("1234567890").display(), "1234567890");
}

// ===== Arithmetic =====

#[test]
fn test_left_to_right_chaining() {
    assert_eq!(run("2+3*4=").display(), "20");
}

#[test]
fn test_longer_chain() {
    // ((10 - 4) / 3) * 5
    assert_eq!(run("10-4/3*5=").display(), "10");
}

#[test]
fn test_decimal_arithmetic() {
    assert_eq!(run("1.5+2.25=").display(), "3.75");
}

#[test]
fn test_operator_at_start_defaults_operand_to_zero() {
    assert_eq!(run("+5=").display(), "5");
}

#[test]
fn test_divide_by_zero_shows_infinity() {
    assert_eq!(run("5/0=").display(), "Infinity");
}

#[test]
fn test_equals_after_clear_is_not_an_error() {
    let session = run("C=5=");
    assert_eq!(session.display(), "5");
    assert_eq!(session.engine().mode(), Mode::Number);
}

#[test]
fn test_result_feeds_next_chain() {
    let mut session = run("5+3=");
    assert_eq!(session.display(), "8");
    session.press_keys("*2=").unwrap();
    assert_eq!(session.display(), "16");
}

#[test]
fn test_digit_after_equals_starts_fresh() {
    let mut session = run("5+3=");
    session.press_keys("4").unwrap();
    assert_eq!(session.display(), "4");
    assert_eq!(session.engine().pending(), None);
}

// ===== Error sequences =====

#[test]
fn test_double_operator_shows_err() {
    let session = run("5**");
    assert_eq!(session.display(), "Err");
    assert_eq!(session.engine().mode(), Mode::Error);
}

#[test]
fn test_equals_with_no_second_operand_shows_err() {
    assert_eq!(run("7-=").display(), "Err");
}

#[test]
fn test_clear_recovers_from_err() {
    let session = run("5**C");
    assert_eq!(session.display(), "0");
    assert_eq!(session.engine().mode(), Mode::Number);
}

#[test]
fn test_entry_continues_after_err_digit() {
    assert_eq!(run("5**7+3=").display(), "10");
}

// ===== Rendering =====

#[test]
fn test_panel_mirrors_engine_after_every_event() {
    let mut session = Session::new();
    for key in "12+34=".chars() {
        session.press(ButtonEvent::from_key(key).unwrap());
        assert_eq!(session.display(), session.engine().display());
    }
    // initial render plus one per event
    assert_eq!(session.panel().render_count(), 7);
}

#[test]
fn test_err_rendered_verbatim() {
    let session = run("5**");
    assert_eq!(session.panel().text(), "Err");
}

// ===== Scripts =====

#[test]
fn test_json_script_matches_key_script() {
    let events = vec![
        ButtonEvent::Digit(5),
        ButtonEvent::Divide,
        ButtonEvent::Digit(0),
        ButtonEvent::Equals,
    ];
    let json = serde_json::to_string(&events).unwrap();

    let mut scripted = Session::new();
    scripted.run_script(&json).unwrap();
    assert_eq!(scripted.display(), run("5/0=").display());
}

#[test]
fn test_snapshot_reports_session_state() {
    let session = run("9*");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.mode, Mode::Operation);
    assert_eq!(snapshot.operand, "9");
    assert_eq!(snapshot.pending, Some(Pending::Op(Operator::Multiply)));
}
