use kpitrack_core::{filter_by_period, CsvRecordStore, MetricRecord, RecordStore, StoreError};
use std::path::PathBuf;

fn store_in(dir: &tempfile::TempDir) -> CsvRecordStore {
    CsvRecordStore::new(dir.path().join("metrics.csv"))
}

fn record(year: u16, month: u8, revenue: f64) -> MetricRecord {
    MetricRecord::new(year, month, revenue, revenue / 4.0, 10.0, 500.0).unwrap()
}

#[test]
fn load_bootstraps_missing_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert!(store.load().unwrap().is_empty());
    assert!(store.path().exists());
    // A second load must not crash or re-initialize anything.
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn bootstrap_writes_the_fixed_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.load().unwrap();
    let content = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        content.lines().next().unwrap(),
        "year,month,revenue,sales,conversion_rate,inventory_value"
    );
}

#[test]
fn upsert_then_period_lookup_returns_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let candidate = record(2025, 3, 1200.0);
    store.upsert(&candidate).unwrap();

    let loaded = store.load().unwrap();
    let found = filter_by_period(&loaded, 2025, 3).unwrap();
    assert_eq!(found, candidate);
    assert_eq!(loaded.len(), 1);
}

#[test]
fn upsert_same_key_overwrites_instead_of_duplicating() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.upsert(&record(2025, 3, 100.0)).unwrap();
    let after = store.upsert(&record(2025, 3, 250.0)).unwrap();

    assert_eq!(after.len(), 1);
    assert_eq!(after[0].revenue, 250.0);
}

#[test]
fn collection_holds_at_most_one_record_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.upsert(&record(2024, 12, 10.0)).unwrap();
    store.upsert(&record(2025, 1, 20.0)).unwrap();
    store.upsert(&record(2024, 12, 30.0)).unwrap();
    store.upsert(&record(2025, 1, 40.0)).unwrap();
    let final_state = store.upsert(&record(2025, 2, 50.0)).unwrap();

    assert_eq!(final_state.len(), 3);
    let keys: std::collections::HashSet<_> =
        final_state.iter().map(MetricRecord::key).collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn updating_an_existing_key_keeps_its_relative_position() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.upsert(&record(2025, 5, 1.0)).unwrap();
    store.upsert(&record(2025, 6, 2.0)).unwrap();
    store.upsert(&record(2025, 7, 3.0)).unwrap();

    let after = store.upsert(&record(2025, 6, 99.0)).unwrap();
    let keys: Vec<_> = after.iter().map(MetricRecord::key).collect();
    assert_eq!(keys, vec![(2025, 5), (2025, 6), (2025, 7)]);
    assert_eq!(after[1].revenue, 99.0);
}

#[test]
fn upsert_returns_exactly_what_a_fresh_load_sees() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let returned = store.upsert(&record(2025, 8, 777.0)).unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(returned, reloaded);
}

#[test]
fn load_survives_a_fresh_store_handle_on_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");

    let writer = CsvRecordStore::new(&path);
    writer.upsert(&record(2025, 1, 42.0)).unwrap();

    let reader = CsvRecordStore::new(&path);
    let loaded = reader.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].revenue, 42.0);
}

#[test]
fn upsert_rejects_invalid_candidates_without_touching_the_medium() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.upsert(&record(2025, 1, 10.0)).unwrap();

    let bad = MetricRecord {
        month: 13,
        ..record(2025, 1, 10.0)
    };
    let err = store.upsert(&bad).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].revenue, 10.0);
}

#[test]
fn load_rejects_a_foreign_header() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("metrics.csv");
    std::fs::write(&path, "ano,mes,faturamento,vendas,conversao,estoque\n").unwrap();

    let err = CsvRecordStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn load_rejects_duplicate_period_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(
        &path,
        "year,month,revenue,sales,conversion_rate,inventory_value\n\
         2025,3,100.0,25.0,10.0,500.0\n\
         2025,3,200.0,50.0,20.0,600.0\n",
    )
    .unwrap();

    let err = CsvRecordStore::new(&path).load().unwrap_err();
    match err {
        StoreError::InvalidData(message) => assert!(message.contains("duplicate")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_rejects_out_of_range_persisted_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(
        &path,
        "year,month,revenue,sales,conversion_rate,inventory_value\n\
         2025,3,100.0,25.0,250.0,500.0\n",
    )
    .unwrap();

    let err = CsvRecordStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn load_rejects_unparseable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(
        &path,
        "year,month,revenue,sales,conversion_rate,inventory_value\n\
         2025,march,100.0,25.0,10.0,500.0\n",
    )
    .unwrap();

    let err = CsvRecordStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)));
}

#[test]
fn failed_upsert_leaves_prior_durable_state_intact() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.upsert(&record(2025, 1, 10.0)).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    // Corrupt the medium so the pre-write load fails.
    std::fs::write(store.path(), "not,a,valid,header\n").unwrap();
    assert!(store.upsert(&record(2025, 2, 20.0)).is_err());
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "not,a,valid,header\n"
    );

    // Restoring the medium restores normal operation.
    std::fs::write(store.path(), &before).unwrap();
    let after = store.upsert(&record(2025, 2, 20.0)).unwrap();
    assert_eq!(after.len(), 2);
}
