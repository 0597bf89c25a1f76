use std::path::Path;

use internals_export::{is_yaml_path, resolve_path, export_digest};
use sha2::{Digest, Sha256};
use tempfile::tempdir;

#[test]
fn resolve_path_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let abs = tmp.path().join("out.csv");
    let resolved = resolve_path(abs.to_str().unwrap()).expect("resolve");
    assert_eq!(resolved, abs);
}

#[test]
fn resolve_path_joins_relative_paths_onto_cwd() {
    let resolved = resolve_path("nested/out.csv").expect("resolve");
    let expected = std::env::current_dir().unwrap().join("nested/out.csv");
    assert_eq!(resolved, expected);
}

#[test]
fn yaml_detection_uses_extension() {
    assert!(is_yaml_path(Path::new("snap.yaml")));
    assert!(is_yaml_path(Path::new("snap.YML")));
    assert!(!is_yaml_path(Path::new("snap.json")));
    assert!(!is_yaml_path(Path::new("snap")));
}

#[test]
fn export_digest_matches_in_memory_digest() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("rows.csv");
    std::fs::write(&path, b"constant,MAX,10\n").unwrap();

    let mut hasher = Sha256::new();
    hasher.update(b"constant,MAX,10\n");
    assert_eq!(export_digest(&path).unwrap(), format!("{:x}", hasher.finalize()));
}

#[test]
fn export_digest_covers_files_larger_than_one_read() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("big.csv");
    let body = "function,strlen\n".repeat(4096);
    std::fs::write(&path, &body).unwrap();

    assert_eq!(export_digest(&path).unwrap(), format!("{:x}", Sha256::digest(body.as_bytes())));
}

#[test]
fn export_digest_reports_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let err = export_digest(&tmp.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("for hashing"), "unexpected error: {err}");
}
