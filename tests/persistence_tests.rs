use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use spendbook::domain::{Transaction, TransactionDraft, TransactionKind};
use spendbook::errors::SpendbookError;
use spendbook::storage::{JsonStorage, StorageBackend};

fn storage(temp: &TempDir) -> JsonStorage {
    JsonStorage::new(Some(temp.path().to_path_buf())).expect("storage builds")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample() -> Vec<Transaction> {
    vec![
        Transaction::new(TransactionDraft::new(
            "Monthly Salary",
            5000.0,
            TransactionKind::Income,
            "Salary",
            date(2025, 2, 1),
        )),
        Transaction::new(TransactionDraft::new(
            "Grocery Shopping",
            150.0,
            TransactionKind::Expense,
            "Food & Dining",
            date(2025, 2, 2),
        )),
    ]
}

#[test]
fn save_then_load_round_trips_every_field() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    let transactions = sample();
    storage.save(&transactions).expect("save succeeds");
    let loaded = storage.load().expect("load succeeds");
    assert_eq!(loaded, transactions);
}

#[test]
fn exists_reflects_the_backing_file() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    assert!(!storage.exists());
    storage.save(&[]).expect("save succeeds");
    assert!(storage.exists());
}

#[test]
fn every_save_overwrites_the_whole_collection() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    let transactions = sample();
    storage.save(&transactions).expect("save succeeds");
    storage.save(&transactions[..1]).expect("save succeeds");
    let loaded = storage.load().expect("load succeeds");
    assert_eq!(loaded.len(), 1);
}

#[test]
fn malformed_payload_is_a_typed_error() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    fs::write(storage.file_path(), "{not json").expect("write garbage");
    match storage.load() {
        Err(SpendbookError::MalformedData(_)) => {}
        other => panic!("expected MalformedData, got {other:?}"),
    }
}

#[test]
fn persisted_payload_is_a_json_array_with_legacy_field_names() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    storage.save(&sample()).expect("save succeeds");
    let raw = fs::read_to_string(storage.file_path()).expect("file readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["type"], "income");
    assert_eq!(array[0]["date"], "2025-02-01");
}

#[test]
fn no_tmp_file_remains_after_save() {
    let temp = TempDir::new().expect("tempdir");
    let storage = storage(&temp);
    storage.save(&sample()).expect("save succeeds");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .expect("dir readable")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(leftovers.is_empty());
}
