use std::path::PathBuf;

use bp_catalog::{CatalogError, load_catalog};

fn data_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates
    dir.pop(); // repo root
    dir.push("data");
    dir
}

#[test]
fn sample_csv_catalog_loads_sorted() {
    let catalog = load_catalog(&data_dir().join("pumps.csv")).unwrap();
    assert!(catalog.len() >= 10);

    let records = catalog.records();
    for pair in records.windows(2) {
        let ordered = pair[0].hp < pair[1].hp
            || (pair[0].hp == pair[1].hp && pair[0].max_head_m <= pair[1].max_head_m);
        assert!(ordered, "{} before {}", pair[0].model, pair[1].model);
    }
    assert!(records.iter().all(|r| r.stages.is_some()));
}

#[test]
fn csv_and_yaml_samples_agree() {
    let csv = load_catalog(&data_dir().join("pumps.csv")).unwrap();
    let yaml = load_catalog(&data_dir().join("pumps.yaml")).unwrap();
    assert_eq!(csv, yaml);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("bp_catalog_test_pumps.xlsx");
    std::fs::write(&path, "not a spreadsheet").unwrap();
    match load_catalog(&path) {
        Err(CatalogError::UnsupportedFormat(ext)) => assert_eq!(ext, "xlsx"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let path = data_dir().join("does_not_exist.csv");
    assert!(matches!(load_catalog(&path), Err(CatalogError::Io(_))));
}
