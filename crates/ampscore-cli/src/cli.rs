//! Command-line definitions for the `ampscore` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ampscore",
    version,
    about = "AMPscore - composite desirability scoring for antimicrobial peptide records."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single record file and print the result as JSON.
    Score(ScoreArgs),
    /// Score a directory of record files and write merged artefacts.
    Batch(BatchArgs),
    /// Build the peptide index for a directory of record files.
    Index(IndexArgs),
    /// Write a template scoring configuration in YAML.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to a JSON record file (single object or array of records).
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Scoring configuration (YAML); defaults apply when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fallback identifier when the record lacks a canonical ID;
    /// defaults to the input file stem.
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

/// What a batch run produces.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Score,
    Index,
    Both,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory of record files. `SPADE_N`/`SPADE_UN` subdirectories
    /// are preferred when present.
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for per-record results and merged artefacts.
    #[arg(short, long, value_name = "DIR", default_value = "scoring_results")]
    pub output: PathBuf,

    /// Scoring configuration (YAML); defaults apply when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Upper bound on concurrently processed files.
    #[arg(short, long, value_name = "NUM", default_value_t = 8)]
    pub workers: usize,

    /// Only process files whose name contains this substring.
    #[arg(short, long, value_name = "SUBSTRING")]
    pub pattern: Option<String>,

    /// What to produce: scores, the peptide index, or both.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Both)]
    pub mode: OutputMode,
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directory of record files.
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for `peptide_index.json`.
    #[arg(short, long, value_name = "DIR", default_value = "scoring_results")]
    pub output: PathBuf,

    /// Upper bound on concurrently processed files.
    #[arg(short, long, value_name = "NUM", default_value_t = 8)]
    pub workers: usize,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the template.
    #[arg(short, long, value_name = "PATH", default_value = "scoring_config.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_batch_defaults() {
        let cli = Cli::parse_from(["ampscore", "batch", "--input", "peptides"]);
        match cli.command {
            Commands::Batch(args) => {
                assert_eq!(args.workers, 8);
                assert_eq!(args.output, PathBuf::from("scoring_results"));
                assert_eq!(args.mode, OutputMode::Both);
            }
            _ => panic!("expected batch subcommand"),
        }
    }
}
