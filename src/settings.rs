//! # The AppSettings Library List
//!
//! Camera Hub keeps `AppSettings.json` one directory above the script files.
//! Among many unrelated keys it holds the library list: the set of prompt
//! GUIDs the app shows, stored under a single flat key whose name happens to
//! contain dots:
//!
//! ```json
//! { "applogic.prompter.libraryList": ["9B2BBF04-...", "D41A11EA-..."] }
//! ```
//!
//! That is one dictionary key, not a nested path. Everything else in the
//! document belongs to the app and must round-trip untouched, so [`Settings`]
//! wraps a raw [`serde_json::Map`] and only ever edits the list entry.
//!
//! A missing or unparsable document yields a fresh one with an empty list.
//! Losing an unparsable document is deliberate: the list is reconstructible
//! from the script files (see the doctor command), and a library the app can
//! read beats a corrupt one it cannot.

use serde_json::{Map, Value};

use crate::error::Result;

pub const LIBRARY_LIST_KEY: &str = "applogic.prompter.libraryList";
pub const SETTINGS_FILENAME: &str = "AppSettings.json";

/// The parsed settings document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    doc: Map<String, Value>,
}

impl Settings {
    /// Parse the raw document text. `None` (file absent) or unparsable text
    /// yields a fresh document; a non-object top level is treated the same.
    pub fn parse(raw: Option<&str>) -> Self {
        let doc = raw
            .and_then(|text| serde_json::from_str::<Value>(text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self { doc }
    }

    /// The library list in stored order. A missing or wrong-shaped entry
    /// reads as empty; non-string elements are ignored.
    pub fn guids(&self) -> Vec<String> {
        match self.doc.get(LIBRARY_LIST_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Append `guid` to the list if absent. Membership is case-insensitive;
    /// existing entries keep their order. Returns whether anything changed.
    pub fn add(&mut self, guid: &str) -> bool {
        if self
            .guids()
            .iter()
            .any(|g| g.eq_ignore_ascii_case(guid))
        {
            return false;
        }
        let entry = self
            .doc
            .entry(LIBRARY_LIST_KEY.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        // A wrong-shaped value is replaced by a fresh list, as the app does.
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        if let Value::Array(items) = entry {
            items.push(Value::String(guid.to_string()));
        }
        true
    }

    /// Remove every occurrence of `guid` (case-insensitive). Returns whether
    /// anything changed.
    pub fn remove(&mut self, guid: &str) -> bool {
        let Some(Value::Array(items)) = self.doc.get_mut(LIBRARY_LIST_KEY) else {
            return false;
        };
        let before = items.len();
        items.retain(|v| {
            v.as_str()
                .map(|g| !g.eq_ignore_ascii_case(guid))
                .unwrap_or(true)
        });
        items.len() != before
    }

    /// The full document as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&Value::Object(self.doc.clone()))?;
        out.push('\n');
        Ok(out)
    }
}
