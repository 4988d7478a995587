//! Per-variety accumulation of segment statistics.
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::filtering::{RowFilter, Validators};
use crate::row::Row;
use crate::sounds::{SegmentValidator, Verdict};

use super::ser;

/// Everything recorded for one variety while walking its rows.
///
/// Invariant: every segment in `class_errors` or `inventory_errors` also
/// appears as a key of `segments` (a flagged segment was necessarily seen).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageReport {
    /// Frequency of every segment ever seen, valid or not.
    #[serde(serialize_with = "ser::sorted_counts")]
    pub segments: HashMap<String, u64>,
    /// Row ids whose value failed row validation, with repeat counts.
    #[serde(serialize_with = "ser::sorted_counts")]
    pub invalid: HashMap<String, u64>,
    /// Distinct segments flagged by the sound-class model.
    #[serde(
        serialize_with = "ser::sorted_set",
        deserialize_with = "ser::set_from_seq"
    )]
    pub class_errors: HashSet<String>,
    /// Distinct segments flagged by the curated inventory.
    #[serde(
        serialize_with = "ser::sorted_set",
        deserialize_with = "ser::set_from_seq"
    )]
    pub inventory_errors: HashSet<String>,
    /// Replacement suggestions per segment (inventory rule only).
    #[serde(
        serialize_with = "ser::sorted_replacements",
        deserialize_with = "ser::replacements_from_map"
    )]
    pub replacements: HashMap<String, HashSet<String>>,
    /// Token-level validation failures.
    pub general_errors: u64,
    /// Rows containing at least one flagged segment.
    pub word_errors: u64,
    /// Full rows containing at least one flagged segment, for samples.
    pub bad_words: Vec<Row>,
}

impl LanguageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one row: either count it as invalid, or segment the
    /// designated column and validate every segment.
    ///
    /// The column value is split on whitespace whether or not the source
    /// pre-segmented it; unsegmented values therefore count one segment
    /// per whitespace-separated chunk.
    pub fn add_row(
        &mut self,
        row: &Row,
        column: &str,
        validators: &Validators,
        validator: &SegmentValidator,
    ) {
        if !validators.accept(row) {
            *self.invalid.entry(row.id.clone()).or_insert(0) += 1;
            return;
        }

        let value = row.column(column).unwrap_or("");
        let mut row_has_error = false;

        for segment in value.split_whitespace() {
            self.segments
                .entry(segment.to_string())
                .and_modify(|count| *count += 1)
                .or_insert(1);

            let judgement = validator.validate(segment);
            if judgement.class.is_flagged() {
                self.class_errors.insert(segment.to_string());
            }
            match &judgement.inventory {
                Verdict::Valid => {}
                Verdict::Invalid(_) => {
                    self.inventory_errors.insert(segment.to_string());
                }
                Verdict::Modified { replacements, .. } => {
                    self.inventory_errors.insert(segment.to_string());
                    self.replacements
                        .entry(segment.to_string())
                        .or_default()
                        .extend(replacements.iter().cloned());
                }
            }
            if !judgement.is_clean() {
                self.general_errors += 1;
                row_has_error = true;
            }
        }

        // once per row, not once per flagged segment
        if row_has_error {
            self.word_errors += 1;
            self.bad_words.push(row.clone());
        }
    }

    /// Accumulate a batch of rows into a fresh report.
    pub fn accumulate(
        rows: &[Row],
        column: &str,
        validators: &Validators,
        validator: &SegmentValidator,
    ) -> Self {
        let mut report = Self::new();
        for row in rows {
            report.add_row(row, column, validators, validator);
        }
        report
    }

    /// Merge another report for the same variety (e.g. from another table
    /// of the same dataset). Counter addition and set union only, so the
    /// merge is commutative up to `bad_words` order.
    pub fn merge(&mut self, other: LanguageReport) {
        for (segment, count) in other.segments {
            *self.segments.entry(segment).or_insert(0) += count;
        }
        for (id, count) in other.invalid {
            *self.invalid.entry(id).or_insert(0) += count;
        }
        self.class_errors.extend(other.class_errors);
        self.inventory_errors.extend(other.inventory_errors);
        for (segment, repls) in other.replacements {
            self.replacements.entry(segment).or_default().extend(repls);
        }
        self.general_errors += other.general_errors;
        self.word_errors += other.word_errors;
        self.bad_words.extend(other.bad_words);
    }

    /// Distinct segment count (the variety's inventory size).
    pub fn inventory_size(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Validators, SegmentValidator) {
        (Validators::default(), SegmentValidator::new())
    }

    fn segmented_row(id: &str, lang: &str, value: &str, segments: &str) -> Row {
        let mut r = Row::new(id, lang, "1", value);
        r.segments = Some(segments.to_string());
        r
    }

    #[test]
    fn counts_segments_and_errors() {
        let (validators, validator) = setup();
        let rows = vec![
            segmented_row("w1", "l1", "kasa", "k a s a"),
            segmented_row("w2", "l1", "ga", "g a"),
            segmented_row("w3", "l1", "?", ""),
        ];
        let report = LanguageReport::accumulate(&rows, "Segments", &validators, &validator);

        assert_eq!(report.segments["a"], 3);
        assert_eq!(report.segments["k"], 1);
        assert_eq!(report.invalid["w3"], 1);
        // "g" is in the inventory replacement table but class-valid
        assert!(report.inventory_errors.contains("g"));
        assert!(!report.class_errors.contains("g"));
        assert_eq!(report.replacements["g"], HashSet::from(["ɡ".to_string()]));
        assert_eq!(report.general_errors, 1);
        assert_eq!(report.word_errors, 1);
        assert_eq!(report.bad_words.len(), 1);
        assert_eq!(report.bad_words[0].id, "w2");
    }

    #[test]
    fn word_errors_once_per_row() {
        let (validators, validator) = setup();
        let rows = vec![segmented_row("w1", "l1", "xx", "$ $ £")];
        let report = LanguageReport::accumulate(&rows, "Segments", &validators, &validator);
        assert_eq!(report.general_errors, 3);
        assert_eq!(report.word_errors, 1);
    }

    #[test]
    fn flagged_segments_were_counted() {
        let (validators, validator) = setup();
        let rows = vec![
            segmented_row("w1", "l1", "a", "a $"),
            segmented_row("w2", "l1", "b", "g b"),
        ];
        let report = LanguageReport::accumulate(&rows, "Segments", &validators, &validator);
        for flagged in report.class_errors.iter().chain(&report.inventory_errors) {
            assert!(
                report.segments.contains_key(flagged),
                "{flagged} flagged but never counted"
            );
        }
    }

    #[test]
    fn merge_is_commutative_on_counts() {
        let (validators, validator) = setup();
        let a = LanguageReport::accumulate(
            &[segmented_row("w1", "l1", "a", "a b $")],
            "Segments",
            &validators,
            &validator,
        );
        let b = LanguageReport::accumulate(
            &[segmented_row("w2", "l1", "c", "b c")],
            "Segments",
            &validators,
            &validator,
        );

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab.segments, ba.segments);
        assert_eq!(ab.class_errors, ba.class_errors);
        assert_eq!(ab.general_errors, ba.general_errors);
        assert_eq!(ab.word_errors, ba.word_errors);
        assert_eq!(ab.inventory_size(), ba.inventory_size());
    }
}
