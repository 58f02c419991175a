//! Form fields sent to the single-video endpoint.
//!
//! `FormFields` is the ordered set of text fields posted as multipart form data;
//! `StoryForm` is a typed builder for the fields the creation endpoint reads.

use anyhow::{bail, Result};

/// Default deity label the backend applies when the field is blank.
pub const DEFAULT_DEITY: &str = "Generic";
/// Default target duration in seconds for a single video.
pub const DEFAULT_DURATION_SECS: u32 = 20;

/// Ordered multipart text fields. Duplicate names are kept, as a browser form would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Parses a `name=value` pair (as given on the command line) and appends it.
    pub fn push_pair(&mut self, pair: &str) -> Result<()> {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("form field must be name=value, got {:?}", pair);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("form field name is empty in {:?}", pair);
        }
        self.push(name, value);
        Ok(())
    }

    /// First value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fields of the single-video story form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryForm {
    pub story: String,
    pub deity: String,
    /// Voice language code; None leaves the choice to the backend.
    pub voice_lang: Option<String>,
    pub duration_secs: u32,
}

impl StoryForm {
    pub fn new(story: impl Into<String>) -> Self {
        Self {
            story: story.into(),
            deity: DEFAULT_DEITY.to_string(),
            voice_lang: None,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    pub fn deity(mut self, deity: impl Into<String>) -> Self {
        self.deity = deity.into();
        self
    }

    pub fn voice_lang(mut self, lang: impl Into<String>) -> Self {
        self.voice_lang = Some(lang.into());
        self
    }

    pub fn duration_secs(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn into_fields(self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push("story", self.story);
        fields.push("deity", self.deity);
        if let Some(lang) = self.voice_lang {
            fields.push("voice_lang", lang);
        }
        fields.push("duration", self.duration_secs.to_string());
        fields
    }
}
