use crate::config::{
    Configuration, APPEND_LABEL, MULTILABEL, NUM_FEATURES, NUM_LABELS, ZERO_BASED_INDEXING,
};
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;

/// Command line options for reading SVMLight files
#[derive(Parser, Debug)]
pub struct Args {
    /// Input files, read in order
    #[arg(required = true, value_parser = validate_file)]
    pub inputs: Vec<PathBuf>,

    /// Number of features in every record
    #[arg(long)]
    pub num_features: i64,

    /// Indices in the input start at 1
    #[arg(long)]
    pub one_based: bool,

    /// Do not append labels to records
    #[arg(long)]
    pub no_labels: bool,

    /// Label field lists active label indices
    #[arg(long)]
    pub multilabel: bool,

    /// Number of labels, required with --multilabel
    #[arg(long)]
    pub num_labels: Option<i64>,

    /// Stop after this many records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Records per batch
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Shuffle records before splitting
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of records held out for validation
    #[arg(long, default_value_t = 0.0)]
    pub validation_ratio: f64,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Maps the flags onto reader options
    pub fn to_configuration(&self) -> Configuration {
        let mut conf = Configuration::new()
            .with(NUM_FEATURES, self.num_features)
            .with(ZERO_BASED_INDEXING, !self.one_based)
            .with(APPEND_LABEL, !self.no_labels)
            .with(MULTILABEL, self.multilabel);
        if let Some(num_labels) = self.num_labels {
            conf.set(NUM_LABELS, num_labels);
        }
        conf
    }
}

/// Validates that a path points to an existing file
fn validate_file(path: &str) -> Result<PathBuf, clap::Error> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(clap::Error::raw(
            ErrorKind::InvalidValue,
            format!("File not found: {}", path.display()),
        ));
    }
    if !path.is_file() {
        return Err(clap::Error::raw(
            ErrorKind::InvalidValue,
            format!("Not a file: {}", path.display()),
        ));
    }
    Ok(path)
}

/// Parses and validates command line arguments
pub fn parse_arguments() -> Result<Args, clap::Error> {
    Args::try_parse()
}
