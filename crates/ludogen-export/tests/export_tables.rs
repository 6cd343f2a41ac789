use std::fs;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use ludogen_core::{Dataset, EntityId, Genre, GeneratorConfig, Platform};
use ludogen_export::{append_audit_event, export_dataset, write_pretty_table};
use ludogen_generate::{GenerationEngine, GenerationReport};
use ludogen_secure::FieldCipher;

#[derive(Serialize)]
struct Row {
    name: &'static str,
    score: i64,
    tags: Vec<&'static str>,
}

fn sample_rows() -> Vec<Row> {
    vec![
        Row {
            name: "short",
            score: 1,
            tags: vec!["a"],
        },
        Row {
            name: "a much longer name",
            score: 4200,
            tags: vec![],
        },
    ]
}

#[test]
fn pretty_table_has_header_separator_and_aligned_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rows.csv");
    let bytes = write_pretty_table(&path, &sample_rows()).expect("write table");
    assert!(bytes > 0);

    let contents = fs::read_to_string(&path).expect("read table");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2 + 2, "header + separator + one line per row");

    // Column order is declaration order of the record type.
    assert!(lines[0].starts_with("name"));
    assert!(lines[0].contains(" | score"));
    assert!(lines[1].chars().all(|c| c == '-' || c == '+'));

    // Padding keeps every line the same width.
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|line| line.chars().count() == width));

    // Arrays render as JSON, strings render bare.
    assert!(lines[2].contains("short"));
    assert!(lines[2].contains("[\"a\"]"));
}

#[test]
fn export_skips_empty_tables_and_writes_the_audit_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = Dataset {
        platforms: vec![Platform {
            id: EntityId::mint(),
            platform_name: "Steam".to_string(),
        }],
        genres: vec![Genre {
            id: EntityId::mint(),
            genre_name: "RPG".to_string(),
        }],
        ..Dataset::default()
    };
    let mut report = GenerationReport::new("test-run".to_string());
    report.record_table("platforms", 1);
    report.record_table("genres", 1);

    let export = export_dataset(dir.path(), &dataset, &report).expect("export");
    assert_eq!(export.tables_written, 2);
    assert_eq!(export.tables_skipped, 10);

    assert!(dir.path().join("platforms.csv").exists());
    assert!(dir.path().join("genres.csv").exists());
    assert!(!dir.path().join("users.csv").exists());

    let audit = fs::read_to_string(dir.path().join("audit_log.csv")).expect("read audit");
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(lines[0], "timestamp,event,details");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("GENERATE"));
    assert!(lines[1].contains("0 users"));
}

#[test]
fn audit_log_appends_without_rewriting_the_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    append_audit_event(dir.path(), "GENERATE", "first run").expect("first append");
    append_audit_event(dir.path(), "GENERATE", "second run").expect("second append");

    let audit = fs::read_to_string(dir.path().join("audit_log.csv")).expect("read audit");
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "timestamp,event,details");
    assert!(lines[1].contains("first run"));
    assert!(lines[2].contains("second run"));
}

#[test]
fn generated_user_table_exports_one_row_per_user() {
    let config = GeneratorConfig {
        num_platforms: 5,
        num_genres: 10,
        num_contributors: 8,
        num_games: 6,
        num_users: 5,
        ..GeneratorConfig::default()
    };
    let cipher = FieldCipher::from_base64_key(&FieldCipher::generate_key_base64())
        .expect("build test cipher");
    let engine = GenerationEngine::new(config, cipher).expect("engine");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (dataset, report) = engine.run(&mut rng).expect("generation run");

    let dir = tempfile::tempdir().expect("tempdir");
    export_dataset(dir.path(), &dataset, &report).expect("export");

    let users = fs::read_to_string(dir.path().join("users.csv")).expect("read users table");
    // Header + separator + one row per user.
    assert_eq!(users.lines().count(), 2 + 5);
}

#[test]
fn export_clears_stale_files_from_previous_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stale = dir.path().join("users.csv");
    fs::write(&stale, "stale").expect("write stale file");

    let dataset = Dataset {
        platforms: vec![Platform {
            id: EntityId::mint(),
            platform_name: "GOG".to_string(),
        }],
        ..Dataset::default()
    };
    let report = GenerationReport::new("test-run".to_string());
    export_dataset(dir.path(), &dataset, &report).expect("export");

    assert!(!stale.exists(), "previous run output is cleared");
}
