//! Dataset directory model and corpus-level driving.
//!
//! A dataset is a directory holding `metadata.json`, optional
//! `languages.csv`/`concepts.csv`, raw tables under `raw/` and generated
//! tables under `cldf/`. Raw parsing is collection-specific and lives
//! outside this crate; here we only consume already-tabular data.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::Validators;
use crate::io::{read_cognates, read_rows, CognateWriter, RowWriter};
use crate::lang::{load_languages, LanguageSpec};
use crate::report::{render, LanguageReport, TranscriptionReport};
use crate::row::Row;
use crate::sounds::SegmentValidator;
use crate::stats;
use crate::{badge, markup::Table};

/// Transcription report configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Column holding the transcription to validate.
    pub column: String,
    /// Whether that column is pre-segmented. Unsegmented corpora still
    /// get a persisted report but no markdown rendering.
    pub segmented: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            column: "Value".to_string(),
            segmented: false,
        }
    }
}

pub struct Dataset {
    pub id: String,
    pub dir: PathBuf,
    pub metadata: serde_json::Value,
    pub languages: Vec<LanguageSpec>,
    pub concepts: Vec<BTreeMap<String, String>>,
}

/// `true` if `dir` looks like a dataset directory.
pub fn is_dataset_dir(dir: &Path) -> bool {
    dir.is_dir()
        && dir.file_name() != Some(OsStr::new("_template"))
        && dir.join("metadata.json").exists()
}

/// Enumerate dataset directories under `repos`, sorted by name.
pub fn discover(repos: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(repos)? {
        let path = entry?.path();
        if is_dataset_dir(&path) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

impl Dataset {
    /// Open a dataset directory. Loading fails fast on a malformed
    /// glottocode in `languages.csv` (data-integrity precondition).
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        if !is_dataset_dir(dir) {
            return Err(Error::InvalidDataset(dir.to_path_buf()));
        }
        let id = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let metadata = serde_json::from_reader(File::open(dir.join("metadata.json"))?)?;

        let lpath = dir.join("languages.csv");
        let languages = if lpath.exists() {
            load_languages(&lpath, &id)?
        } else {
            Vec::new()
        };

        let cpath = dir.join("concepts.csv");
        let mut concepts = Vec::new();
        if cpath.exists() {
            let mut rdr = csv::Reader::from_path(&cpath)?;
            for record in rdr.deserialize() {
                concepts.push(record?);
            }
        }

        Ok(Dataset {
            id,
            dir: dir.to_path_buf(),
            metadata,
            languages,
            concepts,
        })
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.dir.join("raw").join("data")
    }

    pub fn cldf_dir(&self) -> PathBuf {
        self.dir.join("cldf")
    }

    fn md_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    /// Generated value tables, sorted by name, cognate table excluded.
    pub fn value_tables(&self) -> Result<Vec<PathBuf>, Error> {
        let pattern = self.cldf_dir().join("*.csv");
        let mut tables = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry?;
            if path.file_name() != Some(OsStr::new("cognates.csv")) {
                tables.push(path);
            }
        }
        tables.sort();
        Ok(tables)
    }

    /// (cognate count, distinct cognate-set count), zero when no cognate
    /// table was written.
    pub fn cognate_stats(&self) -> Result<(u64, u64), Error> {
        let path = self.cldf_dir().join("cognates.csv");
        if !path.exists() {
            return Ok((0, 0));
        }
        let cognates = read_cognates(&path)?;
        let sets: HashSet<&str> = cognates.iter().map(|c| c.cognate_set_id.as_str()).collect();
        Ok((cognates.len() as u64, sets.len() as u64))
    }

    /// Convert raw tables to validated value tables: every csv under
    /// `raw/data/` is filtered through the row validators and written to
    /// `cldf/`. Datasets without tabular raw data skip this stage.
    pub fn cldf(&self, validators: &Validators) -> Result<(), Error> {
        let raw = self.raw_dir();
        if !raw.is_dir() {
            warn!("no raw tables for dataset {}, skipping cldf stage", self.id);
            return Ok(());
        }
        std::fs::create_dir_all(self.cldf_dir())?;
        for entry in glob::glob(&raw.join("*.csv").to_string_lossy())? {
            let src = entry?;
            let name = match src.file_name() {
                Some(n) => n.to_owned(),
                None => continue,
            };
            if name == "cognates.csv" {
                let mut writer = CognateWriter::new();
                for cognate in read_cognates(&src)? {
                    writer.push(cognate);
                }
                let written = writer.write(&self.cldf_dir().join(name))?;
                info!("{}: {} cognates written", self.id, written);
                continue;
            }
            let rows = read_rows(&src)?;
            let mut writer = RowWriter::new(&self.cldf_dir().join(name), validators.clone())?;
            for row in &rows {
                writer.write(row)?;
            }
            let (written, dropped) = writer.close()?;
            info!(
                "{}: {:?}: {} rows written, {} dropped",
                self.id, src, written, dropped
            );
        }
        Ok(())
    }

    /// Accumulate per-variety reports over every value table.
    pub fn language_reports(
        &self,
        cfg: &ReportConfig,
    ) -> Result<HashMap<String, LanguageReport>, Error> {
        let validators = Validators::default();
        let validator = SegmentValidator::new();
        let mut reports: HashMap<String, LanguageReport> = HashMap::new();

        for table in self.value_tables()? {
            let rows = read_rows(&table)?;
            for (variety, rows) in group_by_variety(&rows) {
                let report =
                    LanguageReport::accumulate(&rows, &cfg.column, &validators, &validator);
                reports.entry(variety).or_default().merge(report);
            }
        }
        Ok(reports)
    }

    /// Run the transcription report for this dataset: rebuild and store
    /// `transcription.json`, and (for segmented corpora with anything to
    /// report) render the markdown document. Returns the per-variety
    /// reports alongside the document so a corpus-wide merge can reuse
    /// them without reading the tables again.
    pub fn run_report(
        &self,
        cfg: &ReportConfig,
    ) -> Result<(HashMap<String, LanguageReport>, Option<String>), Error> {
        let languages = self.language_reports(cfg)?;
        let report = TranscriptionReport::rebuild(&self.dir.join("transcription.json"), languages);
        report.store()?;

        let mut md = None;
        if cfg.segmented {
            let bad_words = collect_bad_words(&report.languages);
            if let Some(record) = render::render(&report.stats, &bad_words, &cfg.column) {
                let mut doc = self.summary(&report)?;
                doc.push('\n');
                doc.push_str(&record);
                md = Some(doc);
            }
        }
        Ok((report.languages, md))
    }

    /// [Dataset::run_report], keeping only the markdown document.
    pub fn report(&self, cfg: &ReportConfig) -> Result<Option<String>, Error> {
        let (_, md) = self.run_report(cfg)?;
        Ok(md)
    }

    /// Prose statistics block heading the markdown report.
    fn summary(&self, report: &TranscriptionReport) -> Result<String, Error> {
        let mut rows = Vec::new();
        for table in self.value_tables()? {
            rows.extend(read_rows(&table)?);
        }
        let (synonymy_sum, varieties) = stats::synonymy_index(&rows);
        let synonymy = if varieties.is_empty() {
            1.0
        } else {
            synonymy_sum / varieties.len() as f64
        };
        let concepts: HashSet<&str> = rows
            .iter()
            .map(|r| r.parameter_id.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        let (cognates, cognate_sets) = self.cognate_stats()?;

        let mut doc = format!(
            "# Transcription report for {}\n\n\
             * Varieties: {}\n\
             * Concepts: {}\n\
             * Lexemes: {}\n\
             * Synonymy: {:.2}\n\
             * Cognates: {} (in {} sets)\n\n",
            self.id,
            varieties.len(),
            concepts.len(),
            rows.len(),
            synonymy,
            cognates,
            cognate_sets,
        );
        doc.push_str(&render::summary(&report.stats));
        Ok(doc)
    }

    /// Write `README.md`: citation prose plus a per-table lexeme summary
    /// with quality badges and a totals row.
    pub fn readme(&self) -> Result<PathBuf, Error> {
        let mut lines: Vec<String> = vec![
            format!("## {}", self.md_str("dc:title").unwrap_or(&self.id)),
            String::new(),
            "Cite the source dataset as".to_string(),
            String::new(),
            format!("> {}", self.md_str("dc:bibliographicCitation").unwrap_or("")),
            String::new(),
        ];
        if let Some(license) = self.md_str("dc:license") {
            lines.push(format!("This dataset is licensed under a {license} license"));
            lines.push(String::new());
        }
        if let Some(url) = self.md_str("dc:identifier") {
            lines.push(format!("Available online at {url}"));
            lines.push(String::new());
        }
        if let Some(related) = self.md_str("dc:related") {
            lines.push(format!("See also {related}"));
            lines.push(String::new());
        }

        let (cognates, cognate_sets) = self.cognate_stats()?;
        lines.push("### Cognate sets".to_string());
        lines.push(format!("{cognates} cognates in {cognate_sets} cognate sets"));
        lines.push(String::new());
        lines.push("### Lexemes".to_string());
        lines.push(String::new());

        let mut table = Table::new(&["Name", "Languages", "Concepts", "Lexemes", "Quality"]);
        let mut all_languages = HashSet::new();
        let mut all_concepts = HashSet::new();
        let mut total_rows = 0;
        for path in self.value_tables()? {
            let rows = read_rows(&path)?;
            let name = path
                .file_stem()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let languages: HashSet<String> =
                rows.iter().filter_map(|r| r.variety_id().map(str::to_string)).collect();
            let concepts: HashSet<String> = rows
                .iter()
                .map(|r| r.parameter_id.clone())
                .filter(|p| !p.is_empty())
                .collect();
            let badges = [
                badge::get_badge(&rows, "Glottolog", "Language_ID"),
                badge::get_badge(&rows, "Concepticon", "Parameter_ID"),
                badge::get_badge(&rows, "Source", "Source"),
            ];
            table.append(vec![
                name,
                languages.len().to_string(),
                concepts.len().to_string(),
                rows.len().to_string(),
                badges.join(" "),
            ]);
            all_languages.extend(languages);
            all_concepts.extend(concepts);
            total_rows += rows.len();
        }
        table.append(vec![
            "**total**".to_string(),
            all_languages.len().to_string(),
            all_concepts.len().to_string(),
            total_rows.to_string(),
            String::new(),
        ]);
        lines.push(table.render());

        let path = self.dir.join("README.md");
        std::fs::write(&path, lines.join("\n"))?;
        Ok(path)
    }
}

fn group_by_variety(rows: &[Row]) -> HashMap<String, Vec<Row>> {
    let mut groups: HashMap<String, Vec<Row>> = HashMap::new();
    for row in rows {
        if let Some(variety) = row.variety_id() {
            groups.entry(variety.to_string()).or_default().push(row.clone());
        }
    }
    groups
}

/// Bad words over all varieties, in sorted variety order so the sample is
/// stable across runs.
pub fn collect_bad_words(languages: &HashMap<String, LanguageReport>) -> Vec<Row> {
    languages
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .flat_map(|(_, report)| report.bad_words.iter().cloned())
        .collect()
}

/// Run the transcription report for all datasets and merge the
/// per-variety reports into one corpus-wide map.
///
/// Datasets are processed in parallel and each one is read exactly once:
/// its own `transcription.json` and `TRANSCRIPTION.md` are written as
/// part of the same pass that feeds the merge. A dataset whose tables
/// fail to read is logged and skipped, the others still contribute
/// (failure isolation per dataset, not per row).
pub fn corpus_reports(
    datasets: &[Dataset],
    cfg: &ReportConfig,
) -> HashMap<String, LanguageReport> {
    let per_dataset: Vec<HashMap<String, LanguageReport>> = datasets
        .par_iter()
        .filter_map(|ds| {
            info!("processing {} ...", ds.id);
            match ds.run_report(cfg) {
                Ok((languages, md)) => {
                    if let Some(md) = md {
                        if let Err(e) = std::fs::write(ds.dir.join("TRANSCRIPTION.md"), md) {
                            error!("could not write report document for {}: {}", ds.id, e);
                        }
                    }
                    Some(languages)
                }
                Err(e) => {
                    error!("skipping dataset {}: {}", ds.id, e);
                    None
                }
            }
        })
        .collect();

    // single reduction barrier; merges are commutative and associative
    let mut merged: HashMap<String, LanguageReport> = HashMap::new();
    for reports in per_dataset {
        for (variety, report) in reports {
            merged.entry(variety).or_default().merge(report);
        }
    }
    merged
}
