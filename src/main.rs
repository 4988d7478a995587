//! # lexitab
//!
//! lexitab turns heterogeneous raw wordlist data into validated
//! CLDF-style csv tables and runs a transcription validation report over
//! a corpus of datasets.
//!
//! This project can be used both as a tool to generate and check corpora,
//! or as a lib to integrate row validation and transcription reporting
//! into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! lexitab 0.2.0
//! wordlist corpus generation tool.
//!
//! USAGE:
//!     lexitab <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     cldf      Generate validated cldf tables from raw data
//!     help      Prints this message or the help of the given subcommand(s)
//!     list      List datasets in the repository
//!     readme    Generate dataset README.md files
//!     report    Run the transcription report
//! ```
use std::path::{Path, PathBuf};

use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use lexitab::dataset::{self, Dataset, ReportConfig};
use lexitab::error::Error;
use lexitab::filtering::Validators;
use lexitab::report::{render, TranscriptionReport};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lexitab::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lexitab::List(l) => {
            for dir in dataset::discover(&l.repos)? {
                let ds = Dataset::from_dir(&dir)?;
                let title = ds
                    .metadata
                    .get("dc:title")
                    .and_then(|t| t.as_str())
                    .unwrap_or("");
                println!("{} {}", ds.id, title);
            }
        }

        cli::Lexitab::Cldf(c) => {
            let validators = Validators::default();
            for ds in resolve(&c.repos, c.dataset.as_deref())? {
                info!("processing {} ...", ds.id);
                if let Err(e) = ds.cldf(&validators) {
                    error!("cldf stage failed for {}: {}", ds.id, e);
                }
            }
        }

        cli::Lexitab::Report(r) => {
            let cfg = ReportConfig {
                column: r.column,
                segmented: r.segmented,
            };
            let datasets = resolve(&r.repos, r.dataset.as_deref())?;
            if r.dataset.is_some() {
                for ds in &datasets {
                    info!("processing {} ...", ds.id);
                    match ds.report(&cfg) {
                        Ok(Some(md)) => {
                            std::fs::write(ds.dir.join("TRANSCRIPTION.md"), md)?;
                        }
                        Ok(None) => {}
                        Err(e) => error!("report failed for {}: {}", ds.id, e),
                    }
                }
            } else {
                // one pass: per-dataset reports are written while their
                // per-variety buckets feed the corpus-wide merge
                let merged = dataset::corpus_reports(&datasets, &cfg);
                let report =
                    TranscriptionReport::rebuild(&r.repos.join("transcription.json"), merged);
                report.store()?;
                if cfg.segmented {
                    let bad_words = dataset::collect_bad_words(&report.languages);
                    if let Some(md) = render::render(&report.stats, &bad_words, &cfg.column) {
                        let doc = format!("{}\n{}", render::summary(&report.stats), md);
                        std::fs::write(r.repos.join("TRANSCRIPTION.md"), doc)?;
                    }
                }
            }
        }

        cli::Lexitab::Readme(r) => {
            for ds in resolve(&r.repos, r.dataset.as_deref())? {
                info!("processing {} ...", ds.id);
                match ds.readme() {
                    Ok(path) => println!("{}", path.display()),
                    Err(e) => error!("readme failed for {}: {}", ds.id, e),
                }
            }
        }
    };
    Ok(())
}

/// Resolve a dataset argument: a single dataset by id (or direct path),
/// or every dataset of the repository when omitted.
fn resolve(repos: &Path, dataset: Option<&str>) -> Result<Vec<Dataset>, Error> {
    match dataset {
        Some(name) => {
            let direct = PathBuf::from(name);
            let dir = if dataset::is_dataset_dir(&direct) {
                direct
            } else {
                repos.join(name)
            };
            Ok(vec![Dataset::from_dir(&dir)?])
        }
        None => dataset::discover(repos)?
            .iter()
            .map(|dir| Dataset::from_dir(dir))
            .collect(),
    }
}
