//! csv readers for value and cognate tables.
use std::path::Path;

use crate::error::Error;
use crate::row::{Cognate, Row};

/// Read a whole value table.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, Error> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Read a cognate table.
pub fn read_cognates(path: &Path) -> Result<Vec<Cognate>, Error> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut cognates = Vec::new();
    for record in rdr.deserialize() {
        cognates.push(record?);
    }
    Ok(cognates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_minimal_value_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ID,Language_ID,Parameter_ID,Value").unwrap();
        writeln!(f, "w1,abcd1234,1,kasa").unwrap();
        writeln!(f, "w2,abcd1234,2,tapu").unwrap();
        drop(f);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "kasa");
        assert!(rows[0].segments.is_none());
    }

    #[test]
    fn reads_segments_column_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ID,Language_ID,Parameter_ID,Value,Segments").unwrap();
        writeln!(f, "w1,abcd1234,1,kasa,k a s a").unwrap();
        drop(f);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].segments.as_deref(), Some("k a s a"));
    }
}
