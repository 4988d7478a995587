//! Lexeme row record.
//!
//! Rows follow the CLDF column naming (`ID`, `Language_ID`, `Parameter_ID`,
//! `Value`, ...). Only the four required columns have to be present in a
//! value table; everything else deserializes to [None] when absent.
use serde::{Deserialize, Serialize};

/// A single lexeme row of a value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Language_ID")]
    pub language_id: String,
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Language_name", default)]
    pub language_name: Option<String>,
    #[serde(rename = "Language_local_ID", default)]
    pub language_local_id: Option<String>,
    #[serde(rename = "Parameter_name", default)]
    pub parameter_name: Option<String>,
    /// Whitespace-separated segmented transcription, when the source
    /// collection provides one.
    #[serde(rename = "Segments", default)]
    pub segments: Option<String>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
}

impl Row {
    pub fn new(id: &str, language_id: &str, parameter_id: &str, value: &str) -> Self {
        Row {
            id: id.to_string(),
            language_id: language_id.to_string(),
            parameter_id: parameter_id.to_string(),
            value: value.to_string(),
            language_name: None,
            language_local_id: None,
            parameter_name: None,
            segments: None,
            source: None,
        }
    }

    /// Key used to group rows into one reporting bucket:
    /// local variety id, else language name, else language id.
    /// First non-empty wins; [None] if all three are empty.
    pub fn variety_id(&self) -> Option<&str> {
        self.language_local_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.language_name.as_deref().filter(|s| !s.is_empty()))
            .or_else(|| Some(self.language_id.as_str()).filter(|s| !s.is_empty()))
    }

    /// Column value by name, for the configurable transcription column.
    pub fn column(&self, name: &str) -> Option<&str> {
        match name {
            "ID" => Some(&self.id),
            "Language_ID" => Some(&self.language_id),
            "Parameter_ID" => Some(&self.parameter_id),
            "Value" => Some(&self.value),
            "Language_name" => self.language_name.as_deref(),
            "Language_local_ID" => self.language_local_id.as_deref(),
            "Parameter_name" => self.parameter_name.as_deref(),
            "Segments" => self.segments.as_deref(),
            "Source" => self.source.as_deref(),
            _ => None,
        }
    }
}

/// A cognate judgment row (`cognates.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cognate {
    #[serde(rename = "Word_ID")]
    pub word_id: String,
    #[serde(rename = "Wordlist_ID")]
    pub wordlist_id: String,
    #[serde(rename = "Form")]
    pub form: String,
    #[serde(rename = "Cognate_set_ID")]
    pub cognate_set_id: String,
    #[serde(rename = "Doubt", default)]
    pub doubt: String,
    #[serde(rename = "Cognate_detection_method", default)]
    pub detection_method: String,
    #[serde(rename = "Cognate_source", default)]
    pub source: String,
    #[serde(rename = "Alignment", default)]
    pub alignment: String,
    #[serde(rename = "Alignment_method", default)]
    pub alignment_method: String,
    #[serde(rename = "Alignment_source", default)]
    pub alignment_source: String,
}
