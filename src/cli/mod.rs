//! Command-line interface
//!
//! One-shot command surface: `predict` scores a single record and writes the
//! JSON result to stdout; `inspect` prints artifact details. Diagnostics go
//! to stderr so stdout stays machine-readable.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inference::{FeatureRecord, InferenceEngine, ScoringSession};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}

fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}

fn section(title: &str) {
    eprintln!();
    eprintln!("  {}", title.white().bold());
    eprintln!("  {}", dim(&"─".repeat(56)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "tabscore")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score a single record with a trained model artifact")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one input record with a trained model artifact
    Predict {
        /// Trained model artifact file
        model: PathBuf,

        /// Input record: a path to a JSON file, or an inline JSON object
        input: String,
    },

    /// Show artifact details without scoring
    Inspect {
        /// Trained model artifact file
        model: PathBuf,
    },
}

// ─── Input loading ─────────────────────────────────────────────────────────────

/// Resolve the input argument: an existing file is read as JSON, anything
/// else is parsed as an inline JSON object.
pub fn read_record(arg: &str) -> Result<FeatureRecord> {
    let path = Path::new(arg);

    let text = if path.is_file() {
        std::fs::read_to_string(path)?
    } else {
        arg.to_string()
    };

    FeatureRecord::from_json_str(&text)
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_predict(model_path: &Path, input_arg: &str) -> anyhow::Result<()> {
    let record = read_record(input_arg)?;

    let mut engine = InferenceEngine::new(model_path);
    engine.load()?;

    let result = engine.predict(&record)?;
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}

pub fn cmd_inspect(model_path: &Path) -> anyhow::Result<()> {
    let session = ScoringSession::open(model_path)?;
    let artifact = session.artifact();

    section("Artifact");

    eprintln!("  {:<14} {}", muted("File"), model_path.display());
    eprintln!("  {:<14} {}", muted("Model"), artifact.model.kind_name().white());
    eprintln!(
        "  {:<14} {}",
        muted("Probabilities"),
        if artifact.model.supports_probabilities() {
            "supported"
        } else {
            "not supported"
        }
    );
    eprintln!("  {:<14} {}", muted("Features"), artifact.model.n_features());

    if let Some(names) = session.expected_features() {
        section("Expected features");
        for name in names {
            eprintln!("  {}", name);
        }
    }

    if let Some(labels) = &artifact.class_labels {
        section("Class labels");
        for (i, label) in labels.iter().enumerate() {
            eprintln!("  {:<4} {}", muted(&i.to_string()), label);
        }
    }

    eprintln!();
    Ok(())
}
