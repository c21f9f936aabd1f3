//! memcached-operator - offline evaluator for the Memcached admission policy.
//!
//! Reads an `AdmissionReview` JSON document and writes the policy's response
//! review to stdout:
//!
//! ```bash
//! memcached-operator mutate review.json
//! memcached-operator validate < review.json
//! ```
//!
//! Logs are JSON on stderr, filtered by `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use clap::Parser;
use kube::core::DynamicObject;
use kube::core::admission::AdmissionReview;
use tracing::{error, info};

use memcached_operator::{MemcachedDefaulter, MemcachedValidator, admission};

mod cli;

use cli::{Cli, Commands};

fn read_review(
    path: Option<&Path>,
) -> Result<AdmissionReview<DynamicObject>, Box<dyn std::error::Error>> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    Ok(serde_json::from_reader(reader)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memcached_operator=info".parse()?),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    let review = read_review(cli.command.request_path()).inspect_err(|e| {
        error!(error = %e, "Failed to read AdmissionReview");
    })?;
    info!(mode = cli.command.name(), "Evaluating admission review");

    let response = match cli.command {
        Commands::Mutate { .. } => admission::mutate(&MemcachedDefaulter::new(), review),
        Commands::Validate { .. } => admission::validate(&MemcachedValidator::new(), review),
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}
