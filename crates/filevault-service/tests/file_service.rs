//! Service-level tests for the file operations, run against the in-memory
//! store backend.

use std::sync::Arc;

use filevault_core::config::DeleteMode;
use filevault_core::error::ErrorKind;
use filevault_database::memory::MemoryVersionStore;
use filevault_service::FileService;

fn service(delete_mode: DeleteMode) -> FileService {
    FileService::new(Arc::new(MemoryVersionStore::new(delete_mode)))
}

#[tokio::test]
async fn test_create_starts_at_version_one() {
    let svc = service(DeleteMode::Soft);
    let created = svc.create_file("TestFile", &[1, 2, 3]).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.version, 1);
    assert!(created.is_current);
    assert_eq!(created.data, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts() {
    let svc = service(DeleteMode::Soft);
    svc.create_file("TestFile", &[1]).await.unwrap();

    let err = svc.create_file("TestFile", &[2]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_update_increments_version_and_supersedes() {
    let svc = service(DeleteMode::Soft);
    svc.create_file("TestFile", &[1, 2, 3]).await.unwrap();
    let updated = svc.update_file("TestFile", &[2, 3, 4]).await.unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.version, 2);
    assert!(updated.is_current);

    let current = svc.get_by_name("TestFile").await.unwrap();
    assert_eq!(current.version, 2);
    assert_eq!(current.data, vec![2, 3, 4]);

    let listings = svc.list_files().await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].version, 1);
    assert!(!listings[0].is_current);
    assert_eq!(listings[1].version, 2);
    assert!(listings[1].is_current);
}

#[tokio::test]
async fn test_versions_stay_contiguous() {
    let svc = service(DeleteMode::Soft);
    svc.create_file("TestFile", &[0]).await.unwrap();
    for expected in 2..=5 {
        let updated = svc.update_file("TestFile", &[expected as u8]).await.unwrap();
        assert_eq!(updated.version, expected);
    }
}

#[tokio::test]
async fn test_update_missing_file_fails_not_found() {
    let svc = service(DeleteMode::Soft);
    let err = svc.update_file("Missing", &[1]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_get_missing_file_fails_not_found() {
    let svc = service(DeleteMode::Soft);
    let err = svc.get_by_name("Missing").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_soft_delete_hides_file_but_keeps_rows() {
    let svc = service(DeleteMode::Soft);
    svc.create_file("TestFile", &[1]).await.unwrap();
    svc.update_file("TestFile", &[2]).await.unwrap();

    let affected = svc.delete_file("TestFile").await.unwrap();
    assert_eq!(affected, 1);

    let err = svc.get_by_name("TestFile").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // Updating a deleted file is also a miss.
    let err = svc.update_file("TestFile", &[3]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The rows are still listed, all non-current.
    let listings = svc.list_files().await.unwrap();
    assert_eq!(listings.len(), 2);
    assert!(listings.iter().all(|l| !l.is_current));

    // The name stays reserved.
    let err = svc.create_file("TestFile", &[4]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_hard_delete_removes_rows_and_frees_name() {
    let svc = service(DeleteMode::Hard);
    svc.create_file("TestFile", &[1]).await.unwrap();
    svc.update_file("TestFile", &[2]).await.unwrap();

    let affected = svc.delete_file("TestFile").await.unwrap();
    assert_eq!(affected, 2);
    assert!(svc.list_files().await.unwrap().is_empty());

    let recreated = svc.create_file("TestFile", &[3]).await.unwrap();
    assert_eq!(recreated.version, 1);
    assert!(recreated.is_current);
}

#[tokio::test]
async fn test_delete_twice_fails_not_found() {
    for mode in [DeleteMode::Soft, DeleteMode::Hard] {
        let svc = service(mode);
        svc.create_file("TestFile", &[1]).await.unwrap();
        svc.delete_file("TestFile").await.unwrap();
        let err = svc.delete_file("TestFile").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}

#[tokio::test]
async fn test_delete_missing_file_fails_not_found() {
    let svc = service(DeleteMode::Soft);
    let err = svc.delete_file("Missing").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_list_covers_all_files_in_insertion_order() {
    let svc = service(DeleteMode::Soft);
    svc.create_file("a.bin", &[1]).await.unwrap();
    svc.create_file("b.bin", &[2]).await.unwrap();
    svc.update_file("a.bin", &[3]).await.unwrap();

    let listings = svc.list_files().await.unwrap();
    let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["a.bin", "b.bin", "a.bin"]);
}

#[tokio::test]
async fn test_validation_errors_before_store_access() {
    let svc = service(DeleteMode::Soft);
    assert_eq!(
        svc.create_file("", &[1]).await.unwrap_err().kind,
        ErrorKind::Validation
    );
    assert_eq!(
        svc.get_by_name("dir/evil").await.unwrap_err().kind,
        ErrorKind::Validation
    );
}

#[tokio::test]
async fn test_full_lifecycle() {
    let svc = service(DeleteMode::Soft);

    let created = svc.create_file("TestFile", &[1, 2, 3]).await.unwrap();
    assert_eq!((created.id, created.version, created.is_current), (1, 1, true));

    let updated = svc.update_file("TestFile", &[2, 3, 4]).await.unwrap();
    assert_eq!((updated.id, updated.version, updated.is_current), (2, 2, true));

    let listings = svc.list_files().await.unwrap();
    assert!(!listings[0].is_current);
    assert!(listings[1].is_current);

    svc.delete_file("TestFile").await.unwrap();
    let err = svc.get_by_name("TestFile").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
