use std::collections::BTreeSet;

use serde_json::Value;

use crate::message::Message;

/// One rendered slot of a stream.
///
/// Elements of the response array are decoded one by one, so a single
/// message that does not match the expected shape shows up as one
/// unreadable card instead of failing the whole stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEntry {
    Message(Message),
    Malformed { index: usize, reason: String },
}

impl StreamEntry {
    /// Stable render key for keyed lists.
    pub fn key(&self) -> String {
        match self {
            StreamEntry::Message(message) => message.id.clone(),
            StreamEntry::Malformed { index, .. } => format!("malformed-{index}"),
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            StreamEntry::Message(message) => Some(message),
            StreamEntry::Malformed { .. } => None,
        }
    }
}

/// The messages last fetched for one stream, in render order.
///
/// Snapshots are never merged: every successful fetch produces a new one
/// that replaces the previous snapshot wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamSnapshot {
    entries: Vec<StreamEntry>,
}

impl StreamSnapshot {
    /// Decode a raw response array element by element.
    pub fn from_values(values: Vec<Value>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match serde_json::from_value::<Message>(value) {
                Ok(message) => StreamEntry::Message(message),
                Err(e) => StreamEntry::Malformed {
                    index,
                    reason: e.to_string(),
                },
            })
            .collect();
        Self::from_entries(entries)
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self::from_entries(messages.into_iter().map(StreamEntry::Message).collect())
    }

    /// Entries are ordered by `position`. The backend already sends them that
    /// way; the stable sort only matters if it ever does not, and malformed
    /// entries stay next to the message they followed.
    pub fn from_entries(entries: Vec<StreamEntry>) -> Self {
        let mut last_position = i64::MIN;
        let mut keyed: Vec<(i64, StreamEntry)> = entries
            .into_iter()
            .map(|entry| {
                if let StreamEntry::Message(message) = &entry {
                    last_position = message.position;
                }
                (last_position, entry)
            })
            .collect();
        keyed.sort_by_key(|(position, _)| *position);

        Self {
            entries: keyed.into_iter().map(|(_, entry)| entry).collect(),
        }
    }

    pub fn entries(&self) -> &[StreamEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(StreamEntry::as_message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Streams named as the origin of a cause by any message in this
    /// snapshot.
    pub fn causation_stream_names(&self) -> BTreeSet<String> {
        self.messages()
            .filter_map(|message| message.causation()?.stream_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(position: i64, global_position: i64) -> Value {
        json!({
            "id": format!("id-{global_position}"),
            "type": "Opened",
            "data": {},
            "position": position,
            "global_position": global_position,
            "stream_name": "account-1",
        })
    }

    #[test]
    fn test_from_values_keeps_render_order() {
        let snapshot = StreamSnapshot::from_values(vec![raw(0, 10), raw(1, 14), raw(2, 20)]);
        let positions: Vec<i64> = snapshot.messages().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_out_of_order_positions_are_sorted() {
        let snapshot = StreamSnapshot::from_values(vec![raw(2, 20), raw(0, 10), raw(1, 14)]);
        let positions: Vec<i64> = snapshot.messages().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_malformed_message_is_isolated() {
        let snapshot = StreamSnapshot::from_values(vec![
            raw(0, 10),
            json!({"id": "broken", "type": "Opened"}),
            raw(1, 14),
        ]);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.messages().count(), 2);
        match &snapshot.entries()[1] {
            StreamEntry::Malformed { index, reason } => {
                assert_eq!(*index, 1);
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed entry, got {other:?}"),
        }
        assert_eq!(snapshot.entries()[1].key(), "malformed-1");
        assert_eq!(snapshot.entries()[2].key(), "id-14");
    }

    #[test]
    fn test_causation_stream_names() {
        let mut caused = raw(1, 14);
        caused["metadata"] = json!({
            "causationMessageGlobalPosition": 3,
            "causationMessageStreamName": "accountCommand-1",
        });
        let mut uncaused = raw(2, 20);
        uncaused["metadata"] = json!({"causationMessageStreamName": "ignored"});

        let snapshot = StreamSnapshot::from_values(vec![raw(0, 10), caused, uncaused]);
        let names: Vec<String> = snapshot.causation_stream_names().into_iter().collect();
        assert_eq!(names, vec!["accountCommand-1".to_string()]);
    }
}
