//! Command line definition for the offline evaluator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// memcached-operator - evaluate the Memcached admission policy offline
#[derive(Parser, Debug)]
#[command(name = "memcached-operator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the defaulter and print the mutating response
    Mutate {
        /// AdmissionReview JSON file (stdin when omitted)
        request_path: Option<PathBuf>,
    },

    /// Run the validator and print the validating response
    Validate {
        /// AdmissionReview JSON file (stdin when omitted)
        request_path: Option<PathBuf>,
    },
}

impl Commands {
    /// Name of the subcommand, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Mutate { .. } => "mutate",
            Commands::Validate { .. } => "validate",
        }
    }

    /// File to read the review from, if any
    pub fn request_path(&self) -> Option<&Path> {
        match self {
            Commands::Mutate { request_path } | Commands::Validate { request_path } => {
                request_path.as_deref()
            }
        }
    }
}
