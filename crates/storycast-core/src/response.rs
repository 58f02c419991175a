//! Response bodies returned by the video-creation backend.
//!
//! Every field is optional at parse time. Text fields accept strings, numbers or
//! booleans so that a slightly different backend still renders with fallbacks
//! instead of failing the whole flow.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reply of the single-video creation endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreateResponse {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub ok: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub file: Option<String>,
}

/// Reply of the batch creation endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BatchResponse {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub ok: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    /// Project directory the episode files live in.
    #[serde(default, alias = "project_dir", deserialize_with = "lenient_text")]
    pub project: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub playlist_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub episodes: Vec<Episode>,
}

/// One entry of a batch reply.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Episode {
    #[serde(default, deserialize_with = "lenient_text")]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub file: Option<String>,
    /// Per-episode build result; absent means the episode is assumed built.
    #[serde(default, deserialize_with = "lenient_opt_flag")]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

impl Episode {
    pub fn failed(&self) -> bool {
        self.ok == Some(false)
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_flag(&Value::deserialize(deserializer)?).unwrap_or(false))
}

fn lenient_opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_flag(&Value::deserialize(deserializer)?))
}

/// Accepts an array of episodes; null or any other shape yields an empty list.
/// Entries that are not objects are kept as empty episodes so numbering stays stable.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Episode>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value::<Episode>(item).unwrap_or_default())
        .collect())
}
