//! Message model as served by `GET /api/stream/{streamName}`.
//!
//! `data` and `metadata` are open-ended bags; they keep the key order the
//! backend sent (serde_json is built with `preserve_order`) and are rendered
//! generically by iterating their entries.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

pub type MessageData = Map<String, Value>;

pub const CAUSATION_GLOBAL_POSITION_KEY: &str = "causationMessageGlobalPosition";
pub const CAUSATION_STREAM_NAME_KEY: &str = "causationMessageStreamName";

/// One message of one stream. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "Message.ts")]
pub struct Message {
    pub id: String,

    #[serde(rename = "type")]
    pub message_type: String,

    #[ts(type = "Record<string, unknown>")]
    pub data: MessageData,

    /// Per-stream sequence number
    pub position: i64,

    /// Unique across every stream
    pub global_position: i64,

    pub stream_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "Record<string, unknown> | null")]
    pub metadata: Option<MessageData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Pointer from a message to the message that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CausationReference {
    pub global_position: i64,
    pub stream_name: Option<String>,
}

impl Message {
    /// The causation reference carried in metadata, if any.
    ///
    /// The global position may arrive as a JSON integer or as a numeric
    /// string; anything else means the message has no cause to draw.
    pub fn causation(&self) -> Option<CausationReference> {
        let metadata = self.metadata.as_ref()?;
        let global_position = metadata
            .get(CAUSATION_GLOBAL_POSITION_KEY)
            .and_then(global_position_value)?;
        let stream_name = metadata
            .get(CAUSATION_STREAM_NAME_KEY)
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Some(CausationReference {
            global_position,
            stream_name,
        })
    }

    pub fn anchor_id(&self) -> String {
        anchor_dom_id(self.global_position)
    }

    pub fn detail_dom_id(&self) -> String {
        format!("message-detail-{}", self.global_position)
    }
}

impl CausationReference {
    pub fn same_stream_as(&self, message: &Message) -> bool {
        self.stream_name.as_deref() == Some(message.stream_name.as_str())
    }
}

/// DOM id of the card anchored at `global_position`.
pub fn anchor_dom_id(global_position: i64) -> String {
    format!("message-{global_position}")
}

/// Global positions are non-negative integers, either as JSON numbers or as
/// numeric strings. Anything else is no reference.
fn global_position_value(value: &Value) -> Option<i64> {
    let position = match value {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };
    (position >= 0).then_some(position)
}

/// One row of the detail popup's data/metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
}

/// Table rows for a data bag: one per entry, values pretty-printed as JSON
/// with two-space indentation. Clamping long values is left to CSS.
pub fn detail_rows(data: &MessageData) -> Vec<DetailRow> {
    data.iter()
        .map(|(key, value)| DetailRow {
            key: key.clone(),
            value: serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        })
        .collect()
}

/// Human readable form of a message's `time`, falling back to the raw text.
pub fn display_time(raw: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format(FORMAT).to_string();
    }
    // Message stores commonly omit the offset; those timestamps are UTC.
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.and_utc().format(FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message_json() -> Value {
        json!({
            "id": "8f1c",
            "type": "Shipped",
            "data": {"orderId": "o-1", "carrier": "ups"},
            "position": 3,
            "global_position": 42,
            "stream_name": "shipping-o-1",
            "metadata": {
                "causationMessageGlobalPosition": 17,
                "causationMessageStreamName": "orders-o-1"
            },
            "time": "2024-03-01T12:00:00.123"
        })
    }

    #[test]
    fn test_message_deserialization() {
        let message: Message = serde_json::from_value(message_json()).unwrap();
        assert_eq!(message.message_type, "Shipped");
        assert_eq!(message.global_position, 42);
        assert_eq!(message.anchor_id(), "message-42");

        let keys: Vec<&str> = message.data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["orderId", "carrier"]);
    }

    #[test]
    fn test_metadata_is_optional() {
        let mut value = message_json();
        value.as_object_mut().unwrap().remove("metadata");
        let message: Message = serde_json::from_value(value).unwrap();
        assert!(message.metadata.is_none());
        assert!(message.causation().is_none());
    }

    #[test]
    fn test_causation_reference() {
        let message: Message = serde_json::from_value(message_json()).unwrap();
        let cause = message.causation().unwrap();
        assert_eq!(cause.global_position, 17);
        assert_eq!(cause.stream_name.as_deref(), Some("orders-o-1"));
        assert!(!cause.same_stream_as(&message));
    }

    #[test]
    fn test_causation_position_as_numeric_string() {
        let mut value = message_json();
        value["metadata"]["causationMessageGlobalPosition"] = json!("17");
        let message: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message.causation().unwrap().global_position, 17);
    }

    #[test]
    fn test_causation_position_must_be_non_negative_integer() {
        let mut value = message_json();
        for position in [json!(-3), json!("-3"), json!(17.0), json!(17.5), json!(true)] {
            value["metadata"]["causationMessageGlobalPosition"] = position;
            let message: Message = serde_json::from_value(value.clone()).unwrap();
            assert!(message.causation().is_none());
        }

        value["metadata"]["causationMessageGlobalPosition"] = json!(0);
        let message: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message.causation().unwrap().global_position, 0);
    }

    #[test]
    fn test_causation_requires_position() {
        let mut value = message_json();
        value["metadata"] = json!({"causationMessageStreamName": "orders-o-1"});
        let message: Message = serde_json::from_value(value.clone()).unwrap();
        assert!(message.causation().is_none());

        value["metadata"] = json!({"causationMessageGlobalPosition": null});
        let message: Message = serde_json::from_value(value).unwrap();
        assert!(message.causation().is_none());
    }

    #[test]
    fn test_detail_rows_are_json_stringified() {
        let data = json!({"a": 1, "b": null});
        let rows = detail_rows(data.as_object().unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "a");
        assert_eq!(rows[0].value, "1");
        assert_eq!(rows[1].key, "b");
        assert_eq!(rows[1].value, "null");
    }

    #[test]
    fn test_detail_rows_quote_strings_and_indent_objects() {
        let data = json!({"name": "x", "nested": {"k": true}});
        let rows = detail_rows(data.as_object().unwrap());
        assert_eq!(rows[0].value, "\"x\"");
        assert_eq!(rows[1].value, "{\n  \"k\": true\n}");
    }

    #[test]
    fn test_display_time() {
        assert_eq!(
            display_time("2024-03-01T12:00:00.123"),
            "2024-03-01 12:00:00.123 UTC"
        );
        assert_eq!(
            display_time("2024-03-01T14:00:00+02:00"),
            "2024-03-01 12:00:00.000 UTC"
        );
        assert_eq!(display_time("yesterday"), "yesterday");
    }
}
