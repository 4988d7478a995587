//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexitab", about = "wordlist corpus generation tool.")]
/// Holds every command that is callable by the `lexitab` command.
pub enum Lexitab {
    #[structopt(about = "List datasets in the repository")]
    List(List),
    #[structopt(about = "Generate validated cldf tables from raw data")]
    Cldf(Cldf),
    #[structopt(about = "Run the transcription report")]
    Report(Report),
    #[structopt(about = "Generate dataset README.md files")]
    Readme(Readme),
}

#[derive(Debug, StructOpt)]
pub struct List {
    #[structopt(
        parse(from_os_str),
        long = "repos",
        default_value = "datasets",
        help = "path to the dataset repository"
    )]
    pub repos: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Cldf {
    #[structopt(help = "dataset id (all datasets if omitted)")]
    pub dataset: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "repos",
        default_value = "datasets",
        help = "path to the dataset repository"
    )]
    pub repos: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Report {
    #[structopt(help = "dataset id (all datasets if omitted)")]
    pub dataset: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "repos",
        default_value = "datasets",
        help = "path to the dataset repository"
    )]
    pub repos: PathBuf,
    #[structopt(
        long = "column",
        default_value = "Value",
        help = "column holding the transcription"
    )]
    pub column: String,
    #[structopt(long = "segmented", help = "the column is pre-segmented")]
    pub segmented: bool,
}

#[derive(Debug, StructOpt)]
pub struct Readme {
    #[structopt(help = "dataset id (all datasets if omitted)")]
    pub dataset: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "repos",
        default_value = "datasets",
        help = "path to the dataset repository"
    )]
    pub repos: PathBuf,
}
