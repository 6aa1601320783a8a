use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use pushline_types::Notification;

use crate::models::{GcmNotification, GcmPayload};

/// Build the GCM payload for one notification.
///
/// Pure translation: the same notification and the same `now` always yield
/// the same payload. `now` only participates when `expirationTime` drives
/// the time-to-live.
pub fn build_payload(notification: &Notification, now: DateTime<Utc>) -> GcmPayload {
    let mut data = Map::new();
    let mut block = None;

    if notification.data_only {
        // Data-style message with every decoration field flattened in, plus
        // the derived title/body the client would otherwise read from the
        // notification block.
        insert_str(&mut data, "messageFrom", &notification.message_from);
        insert_str(&mut data, "alert", &notification.alert);
        insert_str(&mut data, "title", &notification.message_from);
        insert_str(&mut data, "body", &notification.alert);
        insert_decorations(&mut data, notification);
        data.insert("dataOnly".to_string(), Value::Bool(true));
    } else if notification.message_from.is_some() {
        // A display notification needs a title source; the block consumes
        // the decoration fields so they do not also appear in data.
        block = Some(GcmNotification {
            title: notification.message_from.clone(),
            body: notification.alert.clone(),
            icon: notification.icon.clone(),
            sound: notification.sound.clone(),
            badge: notification.badge,
            tag: notification.tag.clone(),
            color: notification.color.clone(),
            click_action: notification.click_action.clone(),
        });
    } else {
        // No title source, so no display block; decoration fields travel as
        // plain data under their own keys.
        insert_str(&mut data, "alert", &notification.alert);
        insert_decorations(&mut data, notification);
    }

    for (key, value) in &notification.extras {
        // null marks an absent field; false and 0 are real values
        if !value.is_null() {
            data.insert(key.clone(), value.clone());
        }
    }

    GcmPayload {
        data,
        notification: block,
        collapse_key: notification.collapse_key.clone(),
        delay_while_idle: notification.delay_while_idle,
        time_to_live: time_to_live(notification, now),
    }
}

fn insert_decorations(data: &mut Map<String, Value>, notification: &Notification) {
    insert_str(data, "icon", &notification.icon);
    insert_str(data, "sound", &notification.sound);
    if let Some(badge) = notification.badge {
        data.insert("badge".to_string(), Value::from(badge));
    }
    insert_str(data, "tag", &notification.tag);
    insert_str(data, "color", &notification.color);
    insert_str(data, "clickAction", &notification.click_action);
}

fn insert_str(data: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        data.insert(key.to_string(), Value::String(value.clone()));
    }
}

/// `expirationInterval` wins over `expirationTime`; with neither present the
/// field stays off the wire.
fn time_to_live(notification: &Notification, now: DateTime<Utc>) -> Option<u32> {
    if let Some(interval) = notification.expiration_interval {
        return Some(interval);
    }
    let expiration_time = notification.expiration_time?;
    let millis = expiration_time.signed_duration_since(now).num_milliseconds();
    let secs = (millis as f64 / 1000.0).round();
    Some(secs.max(0.0) as u32)
}
