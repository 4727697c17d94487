/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Audio track, as pushed by the media library server
///
/// The queue only ever looks at `id`. Every other field is kept as raw JSON
/// and written back exactly as it was received, so fields this crate has
/// never heard of (and `null` values) survive a save and reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// All other fields, untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Track {
    /// Create a track carrying only its id
    pub fn new(id: TrackId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Set a top-level field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set `tags.title`, replacing `tags` if it is not an object
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let tags = self
            .fields
            .entry("tags")
            .or_insert_with(|| Value::Object(Map::new()));
        if !tags.is_object() {
            *tags = Value::Object(Map::new());
        }
        if let Value::Object(tags) = tags {
            tags.insert("title".to_string(), Value::String(title.into()));
        }
        self
    }

    /// Top-level field, if present
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// `tags.title`, if it is a string
    pub fn title(&self) -> Option<&str> {
        self.fields.get("tags")?.get("title")?.as_str()
    }

    /// Title for display, falling back to the file name and then the id
    pub fn display_title(&self) -> String {
        if let Some(title) = self.title() {
            return title.to_string();
        }
        self.fields
            .get("path")
            .and_then(Value::as_str)
            .and_then(|path| Path::new(path).file_stem())
            .and_then(|stem| stem.to_str())
            .map_or_else(|| format!("#{}", self.id), str::to_string)
    }
}

impl From<TrackId> for Track {
    fn from(id: TrackId) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_bare_id() {
        let track: Track = serde_json::from_str(r#"{"id":5}"#).unwrap();
        assert_eq!(track.id, TrackId::new(5));
        assert!(track.fields.is_empty());
        assert_eq!(serde_json::to_value(&track).unwrap(), json!({"id": 5}));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = json!({
            "id": 5,
            "media": "/m/a.ogg",
            "mtime": 1234,
            "tags": {"title": "A", "movement": "I"}
        });
        let track: Track = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(track.title(), Some("A"));
        assert_eq!(track.field("mtime"), Some(&json!(1234)));
        assert_eq!(serde_json::to_value(&track).unwrap(), raw);
    }

    #[test]
    fn null_fields_are_kept() {
        let raw = json!({"id": 2, "artistRefs": null, "tags": null});
        let track: Track = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(track.field("artistRefs"), Some(&Value::Null));
        assert_eq!(track.title(), None);
        assert_eq!(serde_json::to_value(&track).unwrap(), raw);
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(serde_json::from_str::<Track>(r#"{"path":"/a.mp3"}"#).is_err());
        assert!(serde_json::from_str::<Track>(r#"{"id":null}"#).is_err());
    }

    #[test]
    fn with_title_keeps_other_tags() {
        let track: Track =
            serde_json::from_value(json!({"id": 1, "tags": {"album": "B"}})).unwrap();
        let track = track.with_title("Song");

        assert_eq!(track.title(), Some("Song"));
        assert_eq!(track.fields["tags"]["album"], json!("B"));

        let replaced = Track::new(TrackId::new(2))
            .with_field("tags", Value::Null)
            .with_title("X");
        assert_eq!(replaced.title(), Some("X"));
    }

    #[test]
    fn display_title_fallbacks() {
        let titled = Track::from(TrackId::new(1)).with_title("Title");
        assert_eq!(titled.display_title(), "Title");

        let from_path = Track::new(TrackId::new(2)).with_field("path", "/music/intro.mp3");
        assert_eq!(from_path.display_title(), "intro");

        let bare = Track::from(TrackId::new(3));
        assert_eq!(bare.display_title(), "#3");
    }
}
