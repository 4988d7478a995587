//! csv writers for value and cognate tables.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::filtering::{RowFilter, Validators};
use crate::row::{Cognate, Row};

/// Value table writer that applies the row validators.
///
/// Rows failing any validator are dropped, not written. Call
/// [RowWriter::close] when done to flush; dropping without closing loses
/// buffered rows.
pub struct RowWriter {
    path: PathBuf,
    inner: csv::Writer<std::fs::File>,
    validators: Validators,
    written: u64,
    dropped: u64,
}

impl RowWriter {
    pub fn new(path: &Path, validators: Validators) -> Result<Self, Error> {
        Ok(RowWriter {
            path: path.to_path_buf(),
            inner: csv::Writer::from_path(path)?,
            validators,
            written: 0,
            dropped: 0,
        })
    }

    /// Write `row` if it passes validation. Returns whether it was kept.
    pub fn write(&mut self, row: &Row) -> Result<bool, Error> {
        if !self.validators.accept(row) {
            self.dropped += 1;
            return Ok(false);
        }
        self.inner.serialize(row)?;
        self.written += 1;
        Ok(true)
    }

    /// Flush and return the (written, dropped) counts.
    pub fn close(mut self) -> Result<(u64, u64), Error> {
        self.inner.flush()?;
        debug!(
            "{:?}: {} rows written, {} dropped",
            self.path, self.written, self.dropped
        );
        Ok((self.written, self.dropped))
    }
}

/// Cognate table writer.
///
/// Only cognates whose set has more than one member are worth storing;
/// singleton sets are skipped. Output is sorted by (set id, wordlist id,
/// word id) for reproducibility.
pub struct CognateWriter {
    cognates: Vec<Cognate>,
}

impl CognateWriter {
    pub fn new() -> Self {
        CognateWriter {
            cognates: Vec::new(),
        }
    }

    pub fn push(&mut self, cognate: Cognate) {
        self.cognates.push(cognate);
    }

    pub fn write(mut self, path: &Path) -> Result<u64, Error> {
        let mut set_sizes: HashMap<&str, u64> = HashMap::new();
        for c in &self.cognates {
            *set_sizes.entry(c.cognate_set_id.as_str()).or_insert(0) += 1;
        }
        let keep: Vec<bool> = self
            .cognates
            .iter()
            .map(|c| set_sizes[c.cognate_set_id.as_str()] > 1)
            .collect();
        let mut rows: Vec<Cognate> = self
            .cognates
            .drain(..)
            .zip(keep)
            .filter_map(|(c, k)| k.then_some(c))
            .collect();
        rows.sort_by(|a, b| {
            (&a.cognate_set_id, &a.wordlist_id, &a.word_id)
                .cmp(&(&b.cognate_set_id, &b.wordlist_id, &b.word_id))
        });

        let mut wtr = csv::Writer::from_path(path)?;
        let mut written = 0;
        for row in rows {
            wtr.serialize(row)?;
            written += 1;
        }
        wtr.flush()?;
        Ok(written)
    }
}

impl Default for CognateWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::{read_cognates, read_rows};

    #[test]
    fn writer_drops_invalid_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.csv");
        let mut w = RowWriter::new(&path, Validators::default()).unwrap();

        for (id, value) in [("w1", "kasa"), ("w2", "?"), ("w3", ""), ("w4", "-"), ("w5", "tapu")] {
            w.write(&Row::new(id, "abcd1234", "1", value)).unwrap();
        }
        let (written, dropped) = w.close().unwrap();
        assert_eq!((written, dropped), (2, 3));

        let rows = read_rows(&path).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "w5"]);
    }

    fn cognate(word: &str, wordlist: &str, set: &str) -> Cognate {
        Cognate {
            word_id: word.to_string(),
            wordlist_id: wordlist.to_string(),
            form: "form".to_string(),
            cognate_set_id: set.to_string(),
            doubt: String::new(),
            detection_method: String::new(),
            source: String::new(),
            alignment: String::new(),
            alignment_method: String::new(),
            alignment_source: String::new(),
        }
    }

    #[test]
    fn singleton_cognate_sets_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cognates.csv");

        let mut w = CognateWriter::new();
        w.push(cognate("w2", "list1", "B"));
        w.push(cognate("w1", "list1", "B"));
        w.push(cognate("w3", "list1", "lonely"));
        assert_eq!(w.write(&path).unwrap(), 2);

        let rows = read_cognates(&path).unwrap();
        // sorted by (set, wordlist, word), singleton gone
        let ids: Vec<&str> = rows.iter().map(|c| c.word_id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "w2"]);
    }
}
