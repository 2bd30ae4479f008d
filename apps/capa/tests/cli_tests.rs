//! Tests for the CLI commands, argument parsing and config wiring.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use capa::cli::{
    Cli, Commands, JournalAction, SnapshotAction, cmd_check, cmd_journal_append,
    cmd_journal_tail, cmd_snapshot_build, cmd_snapshot_inspect, execute, parse_meta,
};
use capa::config::CapaConfig;
use capa_core::{
    CapaError, Edge, JournalEntry, JournalReader, MetaValue, Metadata, Node, NodeId, decode,
    encode,
};
use clap::Parser;
use tempfile::TempDir;

// =============================================================================
// METADATA ARGUMENTS
// =============================================================================

#[test]
fn test_parse_meta_types() {
    let pairs = vec![
        "note=contains rauschen".to_string(),
        "count=5".to_string(),
        "flag=true".to_string(),
        "eq=a=b".to_string(),
    ];
    let meta = parse_meta(&pairs).unwrap();

    assert_eq!(meta["note"], MetaValue::Text("contains rauschen".to_string()));
    assert_eq!(meta["count"], MetaValue::Number(5.0));
    assert_eq!(meta["flag"], MetaValue::Bool(true));
    assert_eq!(meta["eq"], MetaValue::Text("a=b".to_string()));
}

#[test]
fn test_parse_meta_rejects_missing_separator() {
    let result = parse_meta(&["novalue".to_string()]);
    assert!(matches!(result, Err(CapaError::ConfigError(_))));

    let result = parse_meta(&["=value".to_string()]);
    assert!(matches!(result, Err(CapaError::ConfigError(_))));
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_uses_default_policy() {
    let config = CapaConfig::default();

    assert!(cmd_check(&config, false, "normal concept", &Metadata::new()).unwrap());
    assert!(!cmd_check(&config, true, "this is irrelevant chatter", &Metadata::new()).unwrap());

    let meta = parse_meta(&["count=5".to_string()]).unwrap();
    assert!(cmd_check(&config, false, "ok", &meta).unwrap());
}

#[test]
fn test_check_uses_configured_keywords() {
    let config = CapaConfig::from_toml_str("[filter]\nkeywords = [\"noise\"]\n").unwrap();

    assert!(cmd_check(&config, false, "irrelevant", &Metadata::new()).unwrap());
    assert!(!cmd_check(&config, false, "white noise", &Metadata::new()).unwrap());
}

// =============================================================================
// SNAPSHOT
// =============================================================================

#[test]
fn test_snapshot_build_and_inspect() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("graph.json");
    let output = dir.path().join("stm.bin");
    std::fs::write(
        &script,
        r#"{
            "nodes": [{"label": "concept_A"}, {"label": "concept_B"}],
            "edges": [{"from": 0, "to": 1, "weight": 0.75}],
            "salience": [{"id": 0, "value": 1.5}]
        }"#,
    )
    .unwrap();

    cmd_snapshot_build(false, &script, &output).unwrap();

    let snapshot = decode(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.nodes[0].label, "concept_A");
    assert_eq!(snapshot.nodes[0].salience, 1.5);
    assert_eq!(snapshot.edges[0].from_id, NodeId(0));
    assert_eq!(snapshot.edges[0].to_id, NodeId(1));

    cmd_snapshot_inspect(false, &output).unwrap();
    cmd_snapshot_inspect(true, &output).unwrap();
}

#[test]
fn test_snapshot_build_bad_reference_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("graph.json");
    let output = dir.path().join("stm.bin");
    std::fs::write(
        &script,
        r#"{"nodes":[{"label":"a"}],"edges":[{"from":0,"to":9,"weight":1.0}]}"#,
    )
    .unwrap();

    let result = cmd_snapshot_build(false, &script, &output);
    assert!(matches!(result, Err(CapaError::NodeNotFound(NodeId(9)))));
    assert!(!output.exists());
}

#[test]
fn test_snapshot_inspect_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("garbage.bin");
    std::fs::write(&input, [0xFF, 0xFF, 0xFF]).unwrap();

    let result = cmd_snapshot_inspect(false, &input);
    assert!(matches!(result, Err(CapaError::DeserializationError(_))));
}

#[test]
fn test_snapshot_inspect_rejects_dangling_edge() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dangling.bin");
    let bytes = encode(
        &[Node::new(NodeId(0), "only", 1.0)],
        &[Edge::new(NodeId(0), NodeId(5), 1.0)],
    )
    .unwrap();
    std::fs::write(&input, bytes).unwrap();

    let result = cmd_snapshot_inspect(false, &input);
    assert!(matches!(result, Err(CapaError::NodeNotFound(NodeId(5)))));

    let result = cmd_snapshot_inspect(true, &input);
    assert!(matches!(result, Err(CapaError::NodeNotFound(NodeId(5)))));
}

#[test]
fn test_snapshot_inspect_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = cmd_snapshot_inspect(false, &dir.path().join("absent.bin"));
    assert!(matches!(result, Err(CapaError::IoError(_))));
}

// =============================================================================
// JOURNAL
// =============================================================================

#[test]
fn test_journal_append_then_tail() {
    let dir = TempDir::new().unwrap();
    let journal = dir.path().join("ltm_journal.wal");
    let meta = parse_meta(&["topic=astronomy".to_string()]).unwrap();

    cmd_journal_append(false, &journal, "Die Sonne ist ein Stern.", meta.clone()).unwrap();
    cmd_journal_append(true, &journal, "second", Metadata::new()).unwrap();

    let entries = JournalReader::new(&journal).read_new().unwrap();
    assert_eq!(
        entries,
        vec![
            JournalEntry::with_metadata("Die Sonne ist ein Stern.", meta),
            JournalEntry::new("second"),
        ]
    );

    cmd_journal_tail(false, &journal).unwrap();
    cmd_journal_tail(true, &journal).unwrap();
}

#[test]
fn test_journal_tail_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    cmd_journal_tail(false, &dir.path().join("absent.wal")).unwrap();
}

// =============================================================================
// ARGUMENT PARSING & EXECUTION
// =============================================================================

#[test]
fn test_cli_parses_journal_append() {
    let cli = Cli::try_parse_from([
        "capa", "--journal", "j.wal", "journal", "append", "-t", "hello", "-m", "k=v",
    ])
    .unwrap();

    assert_eq!(cli.journal.as_deref(), Some(std::path::Path::new("j.wal")));
    match cli.command {
        Commands::Journal {
            action: JournalAction::Append { text, meta },
        } => {
            assert_eq!(text, "hello");
            assert_eq!(meta, vec!["k=v".to_string()]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_parses_snapshot_build() {
    let cli = Cli::try_parse_from(["capa", "snapshot", "build", "-i", "g.json", "-o", "s.bin"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Snapshot {
            action: SnapshotAction::Build { .. }
        }
    ));
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["capa"]).is_err());
}

#[test]
fn test_execute_appends_to_flag_journal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("capa.toml");
    let configured = dir.path().join("configured.wal");
    let flagged = dir.path().join("flagged.wal");
    std::fs::write(
        &config,
        format!("[journal]\npath = {:?}\n", configured.display().to_string()),
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "capa",
        "--config",
        config.to_str().unwrap(),
        "--journal",
        flagged.to_str().unwrap(),
        "journal",
        "append",
        "--text",
        "X",
    ])
    .unwrap();
    execute(cli).unwrap();

    assert!(flagged.exists());
    assert!(!configured.exists());
    let contents = std::fs::read_to_string(&flagged).unwrap();
    assert_eq!(contents, "{\"text\":\"X\",\"metadata\":{}}\n");
}

#[test]
fn test_execute_with_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("capa.toml");
    std::fs::write(&config, "[filter]\nkeywords = 5\n").unwrap();

    let cli = Cli::try_parse_from([
        "capa",
        "--config",
        config.to_str().unwrap(),
        "check",
        "--label",
        "x",
    ])
    .unwrap();
    assert!(matches!(execute(cli), Err(CapaError::ConfigError(_))));
}
