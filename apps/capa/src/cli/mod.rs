//! # CAPA CLI Module
//!
//! This module implements the CLI interface for CAPA.
//!
//! ## Available Commands
//!
//! - `check` - Run the relevance filter on a candidate
//! - `snapshot build` - Replay a JSON graph script and write snapshot bytes
//! - `snapshot inspect` - Decode and print a snapshot file
//! - `journal append` - Append an entry to the long-term-memory journal
//! - `journal tail` - Print the entries currently in the journal

mod commands;

use crate::config::CapaConfig;
use capa_core::CapaError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// CAPA - working-memory store
///
/// Holds recently perceived concepts in a small weighted graph and hands
/// events on to long-term memory through an append-only journal.
#[derive(Parser, Debug)]
#[command(name = "capa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./capa.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Journal path (overrides config and CAPA_JOURNAL_PATH)
    #[arg(short, long, global = true)]
    pub journal: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a candidate would be admitted into working memory
    Check {
        /// Candidate label
        #[arg(short, long)]
        label: String,

        /// Metadata as key=value (repeatable)
        #[arg(short, long = "meta")]
        meta: Vec<String>,
    },

    /// Build or inspect graph snapshots
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// Append to or read the long-term-memory journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnapshotAction {
    /// Replay a JSON graph script and write the snapshot bytes
    Build {
        /// Graph script (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output snapshot file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decode a snapshot file and print its nodes and edges
    Inspect {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Append one entry
    Append {
        /// Entry text
        #[arg(short, long)]
        text: String,

        /// Metadata as key=value (repeatable)
        #[arg(short, long = "meta")]
        meta: Vec<String>,
    },

    /// Print every entry currently in the journal
    Tail,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CapaError> {
    let config = CapaConfig::load(cli.config.as_deref())?;
    let journal = cli.journal.unwrap_or_else(|| config.journal.path.clone());
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Check { label, meta } => {
            let metadata = parse_meta(&meta)?;
            cmd_check(&config, json_mode, &label, &metadata).map(|_| ())
        }
        Commands::Snapshot { action } => match action {
            SnapshotAction::Build { input, output } => {
                cmd_snapshot_build(json_mode, &input, &output)
            }
            SnapshotAction::Inspect { input } => cmd_snapshot_inspect(json_mode, &input),
        },
        Commands::Journal { action } => match action {
            JournalAction::Append { text, meta } => {
                let metadata = parse_meta(&meta)?;
                cmd_journal_append(json_mode, &journal, &text, metadata)
            }
            JournalAction::Tail => cmd_journal_tail(json_mode, &journal),
        },
    }
}
