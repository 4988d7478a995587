//! Data-quality summary statistics over row tables.
use std::collections::{HashMap, HashSet};

use crate::row::Row;

/// Synonymy index of a row table.
///
/// Rows are grouped per variety; within one variety, the synonymy value is
/// the mean number of rows per distinct concept. The returned scalar is
/// the **sum** of per-variety means (not an average), so results from
/// several tables can be added up before a single final normalization by
/// the size of the combined variety set.
///
/// Rows without a variety id or concept id are excluded.
pub fn synonymy_index(rows: &[Row]) -> (f64, HashSet<String>) {
    let mut synonyms: HashMap<String, HashMap<&str, u64>> = HashMap::new();
    for row in rows {
        if row.parameter_id.is_empty() {
            continue;
        }
        if let Some(lid) = row.variety_id() {
            *synonyms
                .entry(lid.to_string())
                .or_default()
                .entry(row.parameter_id.as_str())
                .or_insert(0) += 1;
        }
    }

    let sum = synonyms
        .values()
        .map(|counts| {
            let total: u64 = counts.values().sum();
            total as f64 / counts.len() as f64
        })
        .sum();

    (sum, synonyms.into_keys().collect())
}

/// Per-variety concept coverage: which concepts each variety attests.
pub fn coverage(rows: &[Row], vars: &mut HashMap<String, HashSet<String>>) {
    for row in rows {
        if row.parameter_id.is_empty() {
            continue;
        }
        if let Some(lid) = row.variety_id() {
            vars.entry(lid.to_string())
                .or_default()
                .insert(row.parameter_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, lang: &str, concept: &str) -> Row {
        Row::new(id, lang, concept, "form")
    }

    #[test]
    fn synonymy_sums_per_language_means() {
        let rows = vec![
            row("1", "X", "1"),
            row("2", "X", "1"),
            row("3", "X", "2"),
            row("4", "Y", "1"),
        ];
        let (sum, langs) = synonymy_index(&rows);
        // X: {1: 2, 2: 1} -> mean 1.5; Y: {1: 1} -> mean 1.0
        assert!((sum - 2.5).abs() < 1e-9);
        let expected: HashSet<String> = ["X", "Y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(langs, expected);
    }

    #[test]
    fn rows_without_keys_are_excluded() {
        let rows = vec![row("1", "", "1"), row("2", "X", "")];
        let (sum, langs) = synonymy_index(&rows);
        assert_eq!(sum, 0.0);
        assert!(langs.is_empty());
    }

    #[test]
    fn coverage_collects_concepts() {
        let mut vars = HashMap::new();
        coverage(
            &[row("1", "X", "1"), row("2", "X", "2"), row("3", "X", "2")],
            &mut vars,
        );
        assert_eq!(vars["X"].len(), 2);
    }
}
