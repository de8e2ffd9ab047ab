use oddsboard_rs::{is_locked, LockPolicy, MarketStatus, OutcomeStatus};
use serde_json::{from_value, json};

fn quote(raw: serde_json::Value) -> OutcomeStatus {
    from_value(raw).unwrap()
}

fn locked(raw: serde_json::Value, remaining: f64) -> bool {
    is_locked(quote(raw).state().as_ref(), remaining)
}

#[test]
fn test_missing_quote_fails_closed() {
    assert!(is_locked(None, 10.0));
}

#[test]
fn test_open_quote() {
    assert!(!locked(json!({ "status": "OPEN" }), 10.0));
}

#[test]
fn test_countdown_overrides_open() {
    assert!(locked(json!({ "status": "OPEN" }), 2.0));
    assert!(locked(json!({ "status": "OPEN" }), 3.0));
}

#[test]
fn test_suspended_vocabularies() {
    for status in [
        json!("SUSPENDED"),
        json!("suspended"),
        json!("CLOSED"),
        json!("Inactive"),
        json!(0),
        json!("0"),
    ] {
        assert!(locked(json!({ "status": status.clone() }), 10.0), "{status}");
    }
}

#[test]
fn test_numeric_open_status() {
    assert!(!locked(json!({ "status": 1 }), 10.0));
    assert!(!locked(json!({ "gstatus": "1" }), 10.0));
}

#[test]
fn test_unknown_or_missing_status_fails_closed() {
    assert!(locked(json!({ "status": "BALL_RUNNING" }), 10.0));
    assert!(locked(json!({ "status": null }), 10.0));
    assert!(locked(json!({ "back": 1.98, "lay": 2.0 }), 10.0));
}

#[test]
fn test_suspend_flag_wins_over_open() {
    assert!(locked(json!({ "status": "OPEN", "suspended": true }), 10.0));
    assert!(locked(json!({ "status": "OPEN", "suspend": "1" }), 10.0));
    assert!(locked(json!({ "status": "OPEN", "suspended": "SUSPENDED" }), 10.0));
    assert!(!locked(json!({ "status": "OPEN", "suspended": false }), 10.0));

    let state = quote(json!({ "status": "OPEN", "suspended": 1 })).state().unwrap();
    assert_eq!(state.status, MarketStatus::Suspended);
}

#[test]
fn test_missing_prices_lock_when_required() {
    let policy = LockPolicy::new(3.0, true);
    let no_prices = quote(json!({ "status": "OPEN", "back": 0, "lay": "0" }));
    let priced = quote(json!({ "status": "OPEN", "back": "1.95", "lay": 0 }));

    assert!(policy.is_locked(no_prices.state().as_ref(), 30.0));
    assert!(!policy.is_locked(priced.state().as_ref(), 30.0));
    assert!(!LockPolicy::default().is_locked(no_prices.state().as_ref(), 30.0));
}
