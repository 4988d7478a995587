//! Persisted transcription report.
//!
//! One JSON file per dataset (`transcription.json`): one key per variety
//! holding its [LanguageReport], plus a `stats` key holding the
//! [CorpusReport]. The file is wholly rebuilt on every run and replaced
//! atomically; a missing or unparseable file just means "no report yet".
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::{Map, Value};

use crate::error::Error;

use super::{CorpusReport, LanguageReport};

/// Key under which the corpus-wide stats live in the report file.
/// Variety keys never collide with it in practice; a variety actually
/// named `stats` would shadow the stats block on reload.
const STATS_KEY: &str = "stats";

#[derive(Debug, Default)]
pub struct TranscriptionReport {
    pub path: PathBuf,
    pub languages: HashMap<String, LanguageReport>,
    pub stats: CorpusReport,
}

impl TranscriptionReport {
    /// Load a previously stored report, falling back to the empty state
    /// when the file is missing or does not parse.
    pub fn load(path: &Path) -> Self {
        let mut report = TranscriptionReport {
            path: path.to_path_buf(),
            ..Default::default()
        };
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return report,
        };
        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => {
                for (key, value) in map {
                    if key == STATS_KEY {
                        match serde_json::from_value(value) {
                            Ok(stats) => report.stats = stats,
                            Err(e) => warn!("unreadable stats in {path:?}: {e}"),
                        }
                    } else {
                        match serde_json::from_value(value) {
                            Ok(lang) => {
                                report.languages.insert(key, lang);
                            }
                            Err(e) => warn!("unreadable report for {key} in {path:?}: {e}"),
                        }
                    }
                }
            }
            Err(e) => {
                warn!("discarding unparseable report {path:?}: {e}");
            }
        }
        report
    }

    /// Rebuild from freshly accumulated per-variety reports.
    pub fn rebuild(path: &Path, languages: HashMap<String, LanguageReport>) -> Self {
        let stats = CorpusReport::aggregate(&languages);
        TranscriptionReport {
            path: path.to_path_buf(),
            languages,
            stats,
        }
    }

    /// Serialize to the on-disk JSON form. Object keys are emitted in
    /// sorted order and every set-valued field as a sorted sequence, so
    /// identical reports serialize byte-identically.
    pub fn to_json(&self) -> Result<String, Error> {
        // serde_json's default map is ordered by key
        let mut map = Map::new();
        for (key, lang) in &self.languages {
            map.insert(key.clone(), serde_json::to_value(lang)?);
        }
        map.insert(STATS_KEY.to_string(), serde_json::to_value(&self.stats)?);
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    /// Atomically (over)write the report file: write to a temporary file
    /// in the same directory, then persist over the destination.
    pub fn store(&self) -> Result<(), Error> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(self.to_json()?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Custom(format!("could not persist {:?}: {}", self.path, e)))?;
        Ok(())
    }
}
