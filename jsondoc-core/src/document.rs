//! The document entity and its JSON payload type.
//!
//! A [`Document`] is an identifier plus an arbitrary JSON object and the timestamps of
//! its creation and last modification. Documents are plain owned values: handing one to
//! a store moves it, and reading one back yields a clone, so a caller can never observe
//! or modify the store's own copy.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON object carried by a document.
pub type DocumentData = Map<String, Value>;

/// A stored JSON document.
///
/// # Example
///
/// ```ignore
/// use jsondoc::document::Document;
/// use serde_json::json;
///
/// let data = json!({ "x": 1 }).as_object().cloned().unwrap();
/// let doc = Document::new("a", data);
///
/// assert_eq!(doc.created_at, doc.updated_at);
/// assert_eq!(doc.version, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique, immutable identifier.
    pub id: String,
    /// The document body. Replaced wholesale on update.
    pub data: DocumentData,
    /// Set once when the document is created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
    /// Starts at 1 and increases by one on every update.
    pub version: u64,
}

impl Document {
    /// Creates a document stamped with the current time.
    pub fn new(id: impl Into<String>, data: DocumentData) -> Self {
        let now = Utc::now();

        Self {
            id: id.into(),
            data,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    /// Replaces the document body and advances `updated_at` and `version`.
    ///
    /// `updated_at` always moves strictly forward, even if the clock has not ticked
    /// since the previous mutation.
    pub fn replace_data(&mut self, data: DocumentData) {
        self.data = data;
        self.updated_at = next_timestamp(self.updated_at);
        self.version += 1;
    }
}

fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();

    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> DocumentData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn new_document_has_equal_timestamps() {
        let doc = Document::new("a", data(json!({ "x": 1 })));

        assert_eq!(doc.id, "a");
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn replace_data_moves_updated_at_forward() {
        let mut doc = Document::new("a", data(json!({ "x": 1 })));
        let created_at = doc.created_at;

        doc.replace_data(data(json!({ "x": 2 })));
        let first = doc.updated_at;
        doc.replace_data(data(json!({ "x": 3 })));

        assert_eq!(doc.created_at, created_at);
        assert!(first > created_at);
        assert!(doc.updated_at > first);
        assert_eq!(doc.version, 3);
        assert_eq!(doc.data, data(json!({ "x": 3 })));
    }

    #[test]
    fn next_timestamp_never_repeats() {
        let future = Utc::now() + TimeDelta::hours(1);

        assert_eq!(next_timestamp(future), future + TimeDelta::nanoseconds(1));
    }

    #[test]
    fn wire_form_has_expected_fields() {
        let doc = Document::new("a", data(json!({ "nested": { "list": [1, null, true] } })));
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["id"], json!("a"));
        assert_eq!(object["data"], json!({ "nested": { "list": [1, null, true] } }));
        assert_eq!(object["version"], json!(1));
        assert!(object["created_at"].as_str().unwrap().ends_with('Z'));
        assert!(object["updated_at"].is_string());

        let back: Document = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }
}
