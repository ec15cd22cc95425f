use super::*;
use crate::render::{StubContext, StubRenderer};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stub_kind_for_table() {
    assert_eq!(StubKind::for_table(None), StubKind::Plain);
    assert_eq!(StubKind::for_table(Some("")), StubKind::Plain);
    assert_eq!(StubKind::for_table(Some("   ")), StubKind::Plain);
    assert_eq!(StubKind::for_table(Some("events")), StubKind::Table);
}

#[test]
fn test_bundled_stubs_present() {
    let plain = BundledStubs.load(StubKind::Plain).unwrap();
    assert_eq!(plain.kind, StubKind::Plain);
    assert!(plain.content.contains("{{ class }}"));
    assert!(!plain.content.contains("{{ table }}"));

    let table = BundledStubs.load(StubKind::Table).unwrap();
    assert_eq!(table.kind, StubKind::Table);
    assert!(table.content.contains("{{ table }}"));
}

#[test]
fn test_resolve_stub_without_table_is_plain() {
    let stub = resolve_stub(&BundledStubs, None).unwrap();
    assert_eq!(stub.kind, StubKind::Plain);
}

#[test]
fn test_resolve_stub_with_table_renders_table_name() {
    let stub = resolve_stub(&BundledStubs, Some("events")).unwrap();
    assert_eq!(stub.kind, StubKind::Table);

    let ctx = StubContext {
        class: "AddEvents".to_string(),
        table: "events".to_string(),
        name: "add_events".to_string(),
        created_at: "2024-03-01 12:00:00".to_string(),
    };
    let rendered = StubRenderer::new().render(&stub, &ctx).unwrap();
    assert!(rendered.contains("ALTER TABLE events"));
    assert!(rendered.contains("AddEvents"));
}

#[test]
fn test_stub_directory_override() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("migration.stub"), "-- custom {{ class }}\n").unwrap();

    let source = StubDirectory::new(dir.path());
    let stub = source.load(StubKind::Plain).unwrap();
    assert_eq!(stub.content, "-- custom {{ class }}\n");
}

#[test]
fn test_stub_directory_missing_without_fallback() {
    let dir = tempdir().unwrap();
    let source = StubDirectory::new(dir.path());

    let err = source.load(StubKind::Table).unwrap_err();
    match err {
        StubError::NotFound { stub } => assert!(stub.ends_with("migration.table.stub")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_stub_directory_missing_with_fallback() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("migration.stub"), "-- custom\n").unwrap();
    let source = StubDirectory::new(dir.path()).with_fallback();

    // Plain is overridden, table falls back to the bundled stub
    assert_eq!(source.load(StubKind::Plain).unwrap().content, "-- custom\n");
    let table = source.load(StubKind::Table).unwrap();
    assert_eq!(table.content, BundledStubs.load(StubKind::Table).unwrap().content);
}

#[test]
fn test_describe() {
    assert_eq!(BundledStubs.describe(), "bundled stubs");
    let source = StubDirectory::new("/tmp/stubs");
    assert!(source.describe().contains("/tmp/stubs"));
}
