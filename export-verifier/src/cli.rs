//! Definitions of CLI arguments for the verifier export script

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::{commands::export_verifier, constants::DEFAULT_ROOT_DIR, errors::ScriptError};

/// Splice the verifying key of a generated verifier into its template
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the circuit whose verifier to export
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub target: String,

    /// Number of public inputs of the circuit
    pub num_public_inputs: usize,

    /// Project root containing the `circuits` and `contracts` directories
    #[arg(long, default_value = DEFAULT_ROOT_DIR)]
    pub root: PathBuf,

    /// Print the exported verifier instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The most verbose level to log at
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Run the export
    pub fn run(self) -> Result<(), ScriptError> {
        export_verifier(ExportArgs {
            target: self.target,
            num_public_inputs: self.num_public_inputs,
            root: self.root,
            stdout: self.stdout,
        })
    }
}

/// Arguments for a single verifier export
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Name of the circuit whose verifier to export
    pub target: String,
    /// Number of public inputs of the circuit
    pub num_public_inputs: usize,
    /// Project root
    pub root: PathBuf,
    /// Print the exported verifier instead of writing it
    pub stdout: bool,
}
