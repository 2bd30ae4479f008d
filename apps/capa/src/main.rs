//! # capa - working-memory CLI
//!
//! ## Usage
//!
//! ```bash
//! # Would this candidate be stored?
//! capa check -l "Ein wichtiger Gedanke" -m source=test
//!
//! # Build a snapshot from a graph script, then look at it
//! capa snapshot build -i graph.json -o stm.bin
//! capa snapshot inspect -i stm.bin
//!
//! # Hand an event to long-term memory
//! capa journal append -t "Die Sonne ist ein Stern." -m topic=astronomy
//! capa journal tail
//! ```

use capa::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing — CAPA_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("CAPA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "capa=info,capa_core=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
