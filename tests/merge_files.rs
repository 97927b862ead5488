// Coverage for the two-files-into-a-third merge operation, including the
// empty-input fallbacks and the identical-path duplicate branch.
use std::path::PathBuf;

use jotfile::{ErrorKind, Indentation, merge, read};
use serde_json::json;
use tempfile::TempDir;

fn file_in(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn write_raw(path: &PathBuf, content: &str) {
    std::fs::write(path, content).expect("write raw file");
}

#[tokio::test]
async fn merge_combines_two_documents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, r#"{"x":1,"shared":{"keep":true,"swap":"a"}}"#);
    write_raw(&b, r#"{"y":2,"shared":{"swap":"b"}}"#);

    merge(&a, &b, &target, Indentation::default())
        .await
        .expect("merge");

    assert_eq!(
        read(&target).await.expect("read"),
        json!({"x": 1, "shared": {"keep": true, "swap": "b"}, "y": 2})
    );
}

#[tokio::test]
async fn merge_concatenates_arrays_second_after_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, r#"{"arr":[1,2]}"#);
    write_raw(&b, r#"{"arr":[3,4]}"#);

    merge(&a, &b, &target, Indentation::default())
        .await
        .expect("merge");

    assert_eq!(read(&target).await.expect("read"), json!({"arr": [1, 2, 3, 4]}));
}

#[tokio::test]
async fn empty_second_input_degenerates_to_a_copy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, r#"{"x":1}"#);
    write_raw(&b, "");

    merge(&a, &b, &target, Indentation::default())
        .await
        .expect("merge");

    assert_eq!(read(&target).await.expect("read"), json!({"x": 1}));
}

#[tokio::test]
async fn empty_first_input_degenerates_to_a_copy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, "");
    write_raw(&b, r#"{"y":2}"#);

    merge(&a, &b, &target, Indentation::default())
        .await
        .expect("merge");

    assert_eq!(read(&target).await.expect("read"), json!({"y": 2}));
}

#[tokio::test]
async fn both_inputs_empty_fails_with_the_first_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, "");
    write_raw(&b, "");

    let err = merge(&a, &b, &target, Indentation::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyFile);
    assert_eq!(err.path(), Some(a.as_path()));
    assert!(!target.exists());
}

#[tokio::test]
async fn identical_paths_duplicate_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let target = file_in(&dir, "copy.json");
    write_raw(&a, r#"{"x":1,"arr":[1,2]}"#);

    merge(&a, &a, &target, Indentation::default())
        .await
        .expect("merge");

    // A duplicate, not a self-merge: arrays must not double up.
    assert_eq!(
        read(&target).await.expect("read"),
        json!({"x": 1, "arr": [1, 2]})
    );
}

#[tokio::test]
async fn identical_empty_paths_fail_with_empty_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let target = file_in(&dir, "copy.json");
    write_raw(&a, "");

    let err = merge(&a, &a, &target, Indentation::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyFile);
    assert_eq!(err.path(), Some(a.as_path()));
    assert!(!target.exists());
}

#[tokio::test]
async fn missing_input_propagates_with_the_failing_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let missing = file_in(&dir, "missing.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, r#"{"x":1}"#);

    let err = merge(&a, &missing, &target, Indentation::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.path(), Some(missing.as_path()));
    assert!(!target.exists());
}

#[tokio::test]
async fn malformed_input_propagates_with_the_failing_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let bad = file_in(&dir, "bad.json");
    let target = file_in(&dir, "out.json");
    write_raw(&a, r#"{"x":1}"#);
    write_raw(&bad, "not json");

    let err = merge(&bad, &a, &target, Indentation::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAJson);
    assert_eq!(err.path(), Some(bad.as_path()));
    assert!(!target.exists());
}

#[tokio::test]
async fn merge_writes_into_a_missing_target_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = file_in(&dir, "a.json");
    let b = file_in(&dir, "b.json");
    let target = dir.path().join("combined").join("out.json");
    write_raw(&a, r#"{"x":1}"#);
    write_raw(&b, r#"{"y":2}"#);

    merge(&a, &b, &target, Indentation::default())
        .await
        .expect("merge");

    assert_eq!(read(&target).await.expect("read"), json!({"x": 1, "y": 2}));
}
