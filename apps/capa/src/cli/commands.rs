//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::CapaConfig;
use crate::script::GraphScript;
use capa_core::{
    CapaError, Graph, JournalEntry, JournalReader, MetaValue, Metadata, WorkingMemory, decode,
    primitives::MAX_SNAPSHOT_SIZE,
};
use std::path::Path;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum graph script size (16 MB).
const MAX_SCRIPT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CapaError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CapaError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(CapaError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > max_size {
        return Err(CapaError::DeserializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

fn read_file(path: &Path, max_size: u64) -> Result<Vec<u8>, CapaError> {
    validate_file_size(path, max_size)?;
    std::fs::read(path)
        .map_err(|e| CapaError::IoError(format!("Cannot read '{}': {}", path.display(), e)))
}

fn print_json(value: &serde_json::Value) -> Result<(), CapaError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CapaError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// METADATA ARGUMENTS
// =============================================================================

/// Parse `key=value` pairs into candidate metadata.
///
/// Values read as `true`/`false` become booleans, values that parse as a
/// number become numbers, everything else is text.
pub fn parse_meta(pairs: &[String]) -> Result<Metadata, CapaError> {
    let mut metadata = Metadata::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CapaError::ConfigError(format!(
                "Invalid metadata '{}': expected key=value",
                pair
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(CapaError::ConfigError(format!(
                "Invalid metadata '{}': empty key",
                pair
            )));
        }
        metadata.insert(key.to_string(), parse_meta_value(value));
    }
    Ok(metadata)
}

fn parse_meta_value(raw: &str) -> MetaValue {
    match raw {
        "true" => MetaValue::Bool(true),
        "false" => MetaValue::Bool(false),
        _ => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => MetaValue::Number(n),
            _ => MetaValue::Text(raw.to_string()),
        },
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run the configured relevance filter and report the verdict.
pub fn cmd_check(
    config: &CapaConfig,
    json_mode: bool,
    label: &str,
    metadata: &Metadata,
) -> Result<bool, CapaError> {
    let memory = WorkingMemory::with_filter(config.relevance_filter());
    let relevant = memory.is_relevant(label, metadata);

    if json_mode {
        print_json(&serde_json::json!({
            "label": label,
            "relevant": relevant,
        }))?;
    } else if relevant {
        println!("relevant: would be stored");
    } else {
        println!("irrelevant: would be discarded");
    }

    Ok(relevant)
}

/// Replay a graph script into a fresh store and write the snapshot bytes.
pub fn cmd_snapshot_build(
    json_mode: bool,
    input: &Path,
    output: &Path,
) -> Result<(), CapaError> {
    tracing::info!("Building snapshot from {:?}", input);

    let script = GraphScript::from_json(&read_file(input, MAX_SCRIPT_FILE_SIZE)?)?;

    let mut memory = WorkingMemory::new();
    script.apply(&mut memory)?;
    let bytes = memory.snapshot_bytes()?;

    std::fs::write(output, &bytes).map_err(|e| {
        CapaError::IoError(format!("Cannot write '{}': {}", output.display(), e))
    })?;

    let graph = memory.graph();
    if json_mode {
        print_json(&serde_json::json!({
            "output": output.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "bytes": bytes.len(),
        }))?;
    } else {
        println!(
            "Wrote {} bytes ({} nodes, {} edges) to {}",
            bytes.len(),
            graph.node_count(),
            graph.edge_count(),
            output.display()
        );
    }

    Ok(())
}

/// Decode a snapshot file, rebuild the store from it and print its contents.
///
/// Edges naming an absent node fail with `NodeNotFound`.
pub fn cmd_snapshot_inspect(json_mode: bool, input: &Path) -> Result<(), CapaError> {
    let bytes = read_file(input, MAX_SNAPSHOT_SIZE as u64)?;
    let graph = Graph::from_snapshot(decode(&bytes)?)?;

    if json_mode {
        let value = serde_json::to_value(graph.snapshot())
            .map_err(|e| CapaError::SerializationError(e.to_string()))?;
        return print_json(&value);
    }

    println!("Nodes ({}):", graph.node_count());
    for node in graph.nodes() {
        println!("  [{}] {:?} salience={}", node.id, node.label, node.salience);
    }
    println!("Edges ({}):", graph.edge_count());
    for edge in graph.edges() {
        println!("  {} -> {} weight={}", edge.from_id, edge.to_id, edge.weight);
    }

    Ok(())
}

/// Append one entry to the journal.
pub fn cmd_journal_append(
    json_mode: bool,
    journal: &Path,
    text: &str,
    metadata: Metadata,
) -> Result<(), CapaError> {
    let entry = JournalEntry::with_metadata(text, metadata);
    WorkingMemory::new().log_entry(journal, &entry)?;
    tracing::info!("Appended entry to {}", journal.display());

    if json_mode {
        print_json(&serde_json::json!({
            "journal": journal.display().to_string(),
            "appended": entry,
        }))?;
    } else {
        println!("Appended to {}", journal.display());
    }

    Ok(())
}

/// Print every entry currently in the journal.
pub fn cmd_journal_tail(json_mode: bool, journal: &Path) -> Result<(), CapaError> {
    let mut reader = JournalReader::new(journal);
    let entries = reader.read_new()?;

    if json_mode {
        let value = serde_json::to_value(&entries)
            .map_err(|e| CapaError::SerializationError(e.to_string()))?;
        return print_json(&value);
    }

    if entries.is_empty() {
        println!("Journal {} is empty", journal.display());
    }
    for entry in &entries {
        println!("{}", entry.to_record()?);
    }

    Ok(())
}
