//! Corpus-wide aggregation of per-variety reports.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::LanguageReport;

/// Corpus-wide statistics, merged over every [LanguageReport].
///
/// Set-valued fields are kept as sorted containers here since this type
/// lives at the serialization boundary; counts are plain integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Distinct invalid-form row ids.
    pub invalid: u64,
    /// Total segment tokens over the whole corpus.
    pub tokens: u64,
    /// Distinct segments over the whole corpus.
    pub segments: u64,
    pub class_errors: u64,
    pub inventory_errors: u64,
    /// Sorted distinct segments flagged by the sound-class model.
    pub class_errors_types: Vec<String>,
    /// Sorted distinct segments flagged by the inventory.
    pub inventory_errors_types: Vec<String>,
    /// Merged replacement suggestions, sorted per segment.
    pub replacements: BTreeMap<String, Vec<String>>,
    /// Mean per-variety distinct segment count.
    pub inventory_size: f64,
    pub general_errors: u64,
    pub word_errors: u64,
    /// Number of rows with at least one flagged segment.
    pub bad_words: u64,
    /// Per-segment token totals across all varieties.
    pub segment_types: BTreeMap<String, u64>,
}

impl CorpusReport {
    /// Merge all per-variety reports into one corpus report.
    ///
    /// Every operation here is commutative (set union, counter addition),
    /// so the result does not depend on the map's iteration order; the
    /// mean inventory size is built incrementally with the denominator
    /// fixed to the variety count before the loop, which keeps every term
    /// independent of iteration order as well. An empty input yields an
    /// all-zero report (no division by zero).
    pub fn aggregate(reports: &HashMap<String, LanguageReport>) -> Self {
        let mut stats = CorpusReport::default();
        let total_languages = reports.len();
        if total_languages == 0 {
            return stats;
        }

        let mut invalid: BTreeSet<&str> = BTreeSet::new();
        let mut segments: BTreeSet<&str> = BTreeSet::new();
        let mut class_errors: BTreeSet<&str> = BTreeSet::new();
        let mut inventory_errors: BTreeSet<&str> = BTreeSet::new();
        let mut replacements: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        // iteration sorted by variety key so that the float accumulation
        // is bit-reproducible across runs and input orders
        for (_, report) in reports.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            invalid.extend(report.invalid.keys().map(String::as_str));
            stats.tokens += report.segments.values().sum::<u64>();
            segments.extend(report.segments.keys().map(String::as_str));
            for (segment, count) in &report.segments {
                *stats.segment_types.entry(segment.clone()).or_insert(0) += count;
            }
            class_errors.extend(report.class_errors.iter().map(String::as_str));
            inventory_errors.extend(report.inventory_errors.iter().map(String::as_str));
            for (segment, repls) in &report.replacements {
                replacements
                    .entry(segment.as_str())
                    .or_default()
                    .extend(repls.iter().map(String::as_str));
            }
            stats.general_errors += report.general_errors;
            stats.word_errors += report.word_errors;
            stats.bad_words += report.bad_words.len() as u64;
            stats.inventory_size += report.inventory_size() as f64 / total_languages as f64;
        }

        stats.invalid = invalid.len() as u64;
        stats.segments = segments.len() as u64;
        stats.class_errors = class_errors.len() as u64;
        stats.inventory_errors = inventory_errors.len() as u64;
        stats.class_errors_types = class_errors.into_iter().map(str::to_string).collect();
        stats.inventory_errors_types = inventory_errors.into_iter().map(str::to_string).collect();
        stats.replacements = replacements
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into_iter().map(str::to_string).collect()))
            .collect();
        stats
    }
}
