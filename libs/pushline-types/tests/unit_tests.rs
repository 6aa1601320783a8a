use chrono::{TimeZone, Utc};
/// Unit tests for the shared push types
///
/// This test module covers:
/// - Notification record serialization/deserialization
/// - Capture of arbitrary custom fields
/// - Push target normalization
/// - Outcome and error types
use pushline_types::*;
use serde_json::json;

#[test]
fn test_notification_deserializes_camel_case_fields() {
    let notification: Notification = serde_json::from_value(json!({
        "alert": "alert message",
        "badge": 3,
        "messageFrom": "Alice",
        "clickAction": "OPEN_CHAT",
        "collapseKey": "chat",
        "delayWhileIdle": false,
        "expirationInterval": 3600
    }))
    .unwrap();

    assert_eq!(notification.alert.as_deref(), Some("alert message"));
    assert_eq!(notification.badge, Some(3));
    assert_eq!(notification.message_from.as_deref(), Some("Alice"));
    assert_eq!(notification.click_action.as_deref(), Some("OPEN_CHAT"));
    assert_eq!(notification.collapse_key.as_deref(), Some("chat"));
    assert_eq!(notification.delay_while_idle, Some(false));
    assert_eq!(notification.expiration_interval, Some(3600));
    assert!(!notification.data_only);
}

#[test]
fn test_notification_captures_custom_fields_in_extras() {
    let notification: Notification = serde_json::from_value(json!({
        "alert": "hi",
        "aKey": "a-value",
        "aFalse": false,
        "aZero": 0
    }))
    .unwrap();

    assert_eq!(notification.extras.get("aKey"), Some(&json!("a-value")));
    assert_eq!(notification.extras.get("aFalse"), Some(&json!(false)));
    assert_eq!(notification.extras.get("aZero"), Some(&json!(0)));
    // Known fields are typed, not duplicated into extras
    assert!(notification.extras.get("alert").is_none());
}

#[test]
fn test_notification_absent_fields_stay_off_the_wire() {
    let serialized = serde_json::to_value(Notification::default()).unwrap();
    let object = serialized.as_object().unwrap();

    assert!(object.get("alert").is_none());
    assert!(object.get("collapseKey").is_none());
    assert!(object.get("delayWhileIdle").is_none());
    assert!(object.get("expirationInterval").is_none());
    assert!(object.get("expirationTime").is_none());
}

#[test]
fn test_notification_round_trip() {
    let notification = Notification {
        alert: Some("ping".to_string()),
        message_from: Some("Bob".to_string()),
        delay_while_idle: Some(false),
        expiration_time: Some(Utc.with_ymd_and_hms(2016, 2, 10, 12, 0, 0).unwrap()),
        ..Default::default()
    };

    let json = serde_json::to_string(&notification).unwrap();
    let deserialized: Notification = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, notification);
}

#[test]
fn test_push_target_single_token_normalizes_to_list() {
    let target = PushTarget::from("a-device-token");
    assert_eq!(target.into_tokens(), vec!["a-device-token".to_string()]);
}

#[test]
fn test_push_target_preserves_token_order() {
    let tokens = vec!["t1".to_string(), "t2".to_string(), "t3".to_string()];
    let target = PushTarget::from(tokens.clone());
    assert_eq!(target.into_tokens(), tokens);
}

#[test]
fn test_partial_failure_starts_empty() {
    let partial = PartialFailure::default();
    assert!(partial.gone_tokens.is_empty());
    assert!(partial.failures.is_empty());
}

#[test]
fn test_dispatch_outcome_is_delivered() {
    assert!(DispatchOutcome::Delivered.is_delivered());
    assert!(!DispatchOutcome::PartialFailure(PartialFailure::default()).is_delivered());
}

#[test]
fn test_result_count_mismatch_message() {
    let err = DispatchError::ResultCountMismatch {
        sent: 3,
        received: 2,
    };
    assert_eq!(
        err.to_string(),
        "gateway returned 2 results for 3 device tokens"
    );
}
