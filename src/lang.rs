//! Language metadata.
//!
//! Datasets may ship a `languages.csv` mapping local language ids to
//! catalog identifiers. Glottocodes are checked on load: a malformed,
//! non-empty glottocode rejects the whole dataset (data-integrity
//! precondition, not a recoverable row error).
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

lazy_static! {
    static ref GC_PATTERN: Regex = Regex::new("^[a-z][a-z0-9]{3}[1-9][0-9]{3}$").unwrap();
}

/// `true` if `code` is a well-formed glottocode (e.g. `stan1295`).
pub fn valid_glottocode(code: &str) -> bool {
    GC_PATTERN.is_match(code)
}

/// One record of a dataset's `languages.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSpec {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "ISO", default)]
    pub iso: String,
    #[serde(rename = "GLOTTOCODE", default)]
    pub glottocode: String,
    #[serde(rename = "GLOTTOLOG_NAME", default)]
    pub glottolog_name: String,
}

/// Load `languages.csv`, failing fast on any malformed glottocode.
pub fn load_languages(path: &Path, dataset: &str) -> Result<Vec<LanguageSpec>, Error> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut languages = Vec::new();
    for record in rdr.deserialize() {
        let lang: LanguageSpec = record?;
        if !lang.glottocode.is_empty() && !valid_glottocode(&lang.glottocode) {
            return Err(Error::Glottocode {
                dataset: dataset.to_string(),
                value: lang.glottocode,
            });
        }
        languages.push(lang);
    }
    Ok(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn glottocode_pattern() {
        assert!(valid_glottocode("stan1295"));
        assert!(valid_glottocode("abcd1234"));
        assert!(!valid_glottocode("Stan1295"));
        assert!(!valid_glottocode("stan0295"));
        assert!(!valid_glottocode("st1295"));
        assert!(!valid_glottocode("stan1295x"));
        assert!(!valid_glottocode(""));
    }

    #[test]
    fn bad_glottocode_rejects_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ID,NAME,ISO,GLOTTOCODE,GLOTTOLOG_NAME").unwrap();
        writeln!(f, "l1,Kasa,kas,abcd1234,Kasa").unwrap();
        writeln!(f, "l2,Tapu,,NOPE,").unwrap();
        drop(f);

        match load_languages(&path, "testset") {
            Err(Error::Glottocode { value, .. }) => assert_eq!(value, "NOPE"),
            other => panic!("expected glottocode error, got {other:?}"),
        }
    }

    #[test]
    fn empty_glottocode_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ID,NAME,ISO,GLOTTOCODE,GLOTTOLOG_NAME").unwrap();
        writeln!(f, "l1,Kasa,kas,,").unwrap();
        drop(f);

        let langs = load_languages(&path, "testset").unwrap();
        assert_eq!(langs.len(), 1);
        assert_eq!(langs[0].name, "Kasa");
    }
}
