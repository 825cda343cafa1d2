//! Command-line argument definitions using clap

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{CapacityFormula, CsvOptions, Parallelism, SearchConfig};

/// Hellwig - Give the best combination of variables for modelling using Hellwig's method
#[derive(Parser, Debug)]
#[command(name = "hellwig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the data (CSV or Parquet)
    pub file: PathBuf,

    /// Dependent variable (column name)
    pub dependent_variable: String,

    /// CSV field delimiter
    #[arg(short, long, default_value = ";")]
    pub delimiter: char,

    /// CSV decimal separator ('.' or ',')
    #[arg(short = 's', long, default_value = ",", value_parser = validate_decimal_separator)]
    pub decimal_separator: char,

    /// The smallest number of variables in a combination
    #[arg(long, default_value = "1")]
    pub min: usize,

    /// The largest number of variables in a combination.
    /// Use 0 for the number of independent variables.
    #[arg(long, default_value = "0")]
    pub max: usize,

    /// Independent variables to check (space separated).
    /// If not given, all columns except the dependent variable are checked.
    #[arg(short = 'i', long, num_args = 1..)]
    pub independent_variables: Vec<String>,

    /// Capacity formula.
    /// Options: "reference" (denominator anchored on the first variable, default)
    /// or "classical" (denominator recomputed for every variable)
    #[arg(long, default_value = "reference")]
    pub formula: CapacityFormula,

    /// Number of worker threads for scoring (0 = one per CPU core)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,

    /// Score combinations on a single thread
    #[arg(long, default_value = "false")]
    pub sequential: bool,

    /// Write the result as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ask for confirmation when the search exceeds this many combinations
    #[arg(long, default_value = "50000000")]
    pub confirm_threshold: u64,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Only print the selected variables and their capacity
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Search parameters. `--max 0` means "size of the pool".
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            min: self.min,
            max: (self.max > 0).then_some(self.max),
            candidates: self.independent_variables.clone(),
            formula: self.formula,
            parallelism: Parallelism::from_flags(self.threads, self.sequential),
        }
    }

    /// CSV parsing options.
    pub fn csv_options(&self) -> Result<CsvOptions> {
        CsvOptions::new(self.delimiter, self.decimal_separator)
    }
}

/// Validator for decimal_separator parameter
fn validate_decimal_separator(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ ('.' | ',')), None) => Ok(c),
        _ => Err(format!(
            "decimal separator must be '.' or ',', got '{}'",
            s
        )),
    }
}
