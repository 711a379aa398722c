//! # Domain Model: Prompts and Their Filenames
//!
//! A [`Prompt`] is one teleprompter script: a GUID, an ordering index, a
//! display name, and the chapter lines shown on the device. Camera Hub reads
//! these from individual JSON files whose field names are fixed:
//!
//! ```json
//! {
//!     "GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7",
//!     "chapters": ["Welcome back.", "Today we cover three things."],
//!     "friendlyName": "Intro",
//!     "index": 1
//! }
//! ```
//!
//! Deserialization is strict: a file missing `GUID`, `friendlyName`, or
//! `index`, carrying a negative index, or carrying a `chapters` value that is
//! not an array of strings is rejected (store scans skip such files with a
//! warning). A missing `chapters` key defaults to an empty list. Extra keys
//! written by Camera Hub are tolerated and dropped.
//!
//! Filenames are derived, never stored: `{index:03}_{slug}_{GUID}.json`,
//! where the slug is the lowercased name with non-alphanumeric runs collapsed
//! to single hyphens. The zero-padded index keeps directory listings in
//! display order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PrompterError, Result};

pub const RECORD_EXT: &str = ".json";

const SLUG_MAX_LEN: usize = 48;
const SLUG_FALLBACK: &str = "prompt";

/// One teleprompter script.
///
/// Field order matters for serialization: Camera Hub's own files list
/// `GUID`, `chapters`, `friendlyName`, `index` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    #[serde(rename = "GUID")]
    pub guid: String,
    pub chapters: Vec<String>,
    #[serde(rename = "friendlyName")]
    pub name: String,
    pub index: u32,
}

impl Prompt {
    pub fn new(name: String, chapters: Vec<String>, guid: String, index: u32) -> Self {
        Self {
            guid,
            chapters,
            name,
            index,
        }
    }

    /// The derived on-disk filename for this prompt.
    pub fn filename(&self) -> String {
        format!(
            "{:03}_{}_{}{}",
            self.index,
            slugify(&self.name),
            self.guid,
            RECORD_EXT
        )
    }

    /// Pretty-printed JSON with a trailing newline, matching the files
    /// Camera Hub writes itself.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

// Strict validation happens here rather than leaking loosely-typed values
// into the rest of the system: the helper carries the raw shapes and the
// manual impl checks guid validity and index range.
impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = PromptHelper::deserialize(deserializer)?;

        let guid = normalize_guid(&helper.guid).map_err(serde::de::Error::custom)?;

        if helper.name.trim().is_empty() {
            return Err(serde::de::Error::custom("friendlyName must not be empty"));
        }

        if helper.index < 0 {
            return Err(serde::de::Error::custom("index must be non-negative"));
        }
        let index = u32::try_from(helper.index)
            .map_err(|_| serde::de::Error::custom("index out of range"))?;

        Ok(Prompt {
            guid,
            chapters: helper.chapters.unwrap_or_default(),
            name: helper.name,
            index,
        })
    }
}

#[derive(Deserialize)]
struct PromptHelper {
    #[serde(rename = "GUID")]
    guid: String,
    #[serde(default)]
    chapters: Option<Vec<String>>,
    #[serde(rename = "friendlyName")]
    name: String,
    index: i64,
}

/// Validate a user-supplied GUID and render it in canonical form:
/// hyphenated, uppercase.
pub fn normalize_guid(raw: &str) -> Result<String> {
    let uuid = Uuid::parse_str(raw.trim())
        .map_err(|_| PrompterError::InvalidGuid(raw.trim().to_string()))?;
    Ok(uuid.hyphenated().to_string().to_ascii_uppercase())
}

/// A fresh random GUID in canonical form.
pub fn generate_guid() -> String {
    Uuid::new_v4().hyphenated().to_string().to_ascii_uppercase()
}

/// Filesystem-safe slug of a display name: lowercased, non-alphanumeric runs
/// collapsed to one hyphen, trimmed to 48 chars, `prompt` when nothing
/// survives.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.len() > SLUG_MAX_LEN {
        slug.truncate(SLUG_MAX_LEN);
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Prompt {
        Prompt::new(
            "Intro".to_string(),
            vec!["a".to_string(), "b".to_string()],
            "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7".to_string(),
            1,
        )
    }

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Intro"), "intro");
        assert_eq!(slugify("Morning Show #12"), "morning-show-12");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  --Hello...   World--  "), "hello-world");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "prompt");
        assert_eq!(slugify("!!!"), "prompt");
    }

    #[test]
    fn test_slugify_truncates() {
        let long = "x".repeat(100);
        assert_eq!(slugify(&long).len(), 48);
    }

    #[test]
    fn test_slugify_no_trailing_hyphen_after_truncation() {
        let name = format!("{}-tail", "a".repeat(47));
        assert!(!slugify(&name).ends_with('-'));
    }

    #[test]
    fn test_filename_derivation() {
        let prompt = sample();
        assert_eq!(
            prompt.filename(),
            "001_intro_9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7.json"
        );
        // Pure function: same inputs, same output
        assert_eq!(prompt.filename(), sample().filename());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let prompt = sample();
        let json = prompt.to_json().unwrap();
        let loaded: Prompt = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, prompt);
    }

    #[test]
    fn test_wire_field_names() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"GUID\""));
        assert!(json.contains("\"friendlyName\""));
        assert!(json.contains("\"chapters\""));
        assert!(json.contains("\"index\""));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_deserialize_missing_chapters_defaults_empty() {
        let json = r#"{
            "GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7",
            "friendlyName": "Intro",
            "index": 2
        }"#;
        let loaded: Prompt = serde_json::from_str(json).unwrap();
        assert!(loaded.chapters.is_empty());
        assert_eq!(loaded.index, 2);
    }

    #[test]
    fn test_deserialize_lowercase_guid_normalized() {
        let json = r#"{
            "GUID": "9b2bbf04-3b75-4dbc-af30-5fbe4d27b9a7",
            "friendlyName": "Intro",
            "index": 1
        }"#;
        let loaded: Prompt = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.guid, "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7");
    }

    #[test]
    fn test_deserialize_tolerates_extra_keys() {
        let json = r#"{
            "GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7",
            "friendlyName": "Intro",
            "index": 1,
            "fontSize": 48
        }"#;
        assert!(serde_json::from_str::<Prompt>(json).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        // Missing GUID
        assert!(serde_json::from_str::<Prompt>(r#"{"friendlyName": "x", "index": 1}"#).is_err());
        // Unparseable GUID
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "nope", "friendlyName": "x", "index": 1}"#
        )
        .is_err());
        // Missing friendlyName
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "index": 1}"#
        )
        .is_err());
        // Empty friendlyName
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": " ", "index": 1}"#
        )
        .is_err());
        // Missing index
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": "x"}"#
        )
        .is_err());
        // Negative index
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": "x", "index": -1}"#
        )
        .is_err());
        // Non-integer index
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": "x", "index": "1"}"#
        )
        .is_err());
        // chapters present but not an array of strings
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": "x", "index": 1, "chapters": "a"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Prompt>(
            r#"{"GUID": "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7", "friendlyName": "x", "index": 1, "chapters": [1, 2]}"#
        )
        .is_err());
    }

    #[test]
    fn test_normalize_guid_accepts_any_case() {
        let guid = normalize_guid(" 9b2bbf04-3b75-4dbc-af30-5fbe4d27b9a7 ").unwrap();
        assert_eq!(guid, "9B2BBF04-3B75-4DBC-AF30-5FBE4D27B9A7");
    }

    #[test]
    fn test_normalize_guid_rejects_garbage() {
        assert!(matches!(
            normalize_guid("not-a-guid"),
            Err(PrompterError::InvalidGuid(_))
        ));
    }

    #[test]
    fn test_generate_guid_is_canonical() {
        let guid = generate_guid();
        assert_eq!(guid, guid.to_ascii_uppercase());
        assert_eq!(normalize_guid(&guid).unwrap(), guid);
    }
}
