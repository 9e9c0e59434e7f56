use chrono::NaiveDate;

use anote_intake::application::ports::UploadStoreError;
use anote_intake::infrastructure::storage::{DirectoryNaming, StorageNamer};

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 7)
        .unwrap()
}

#[tokio::test]
async fn given_timestamp_naming_when_naming_then_directory_is_second_resolution_stamp() {
    let dir = tempfile::TempDir::new().unwrap();
    let namer = StorageNamer::new(dir.path(), DirectoryNaming::Timestamp);

    let stored = namer.name_at("lecture one.pdf", fixed_time()).await.unwrap();

    assert_eq!(stored.directory, "2024-03-09 14-05-07");
    assert_eq!(stored.filename, "lecture_one.pdf");
    assert!(dir.path().join("2024-03-09 14-05-07").is_dir());
}

#[tokio::test]
async fn given_timestamp_naming_when_same_second_then_paths_collide() {
    let dir = tempfile::TempDir::new().unwrap();
    let namer = StorageNamer::new(dir.path(), DirectoryNaming::Timestamp);

    let first = namer.name_at("a.txt", fixed_time()).await.unwrap();
    let second = namer.name_at("a.txt", fixed_time()).await.unwrap();

    assert_eq!(first.path, second.path);
}

#[tokio::test]
async fn given_unique_naming_when_same_second_then_directories_differ() {
    let dir = tempfile::TempDir::new().unwrap();
    let namer = StorageNamer::new(dir.path(), DirectoryNaming::Unique);

    let first = namer.name_at("a.txt", fixed_time()).await.unwrap();
    let second = namer.name_at("a.txt", fixed_time()).await.unwrap();

    assert_ne!(first.directory, second.directory);
    assert!(first.directory.starts_with("2024-03-09 14-05-07 "));
    assert!(second.directory.starts_with("2024-03-09 14-05-07 "));
}

#[tokio::test]
async fn given_name_that_sanitizes_to_nothing_when_naming_then_returns_empty_filename() {
    let dir = tempfile::TempDir::new().unwrap();
    let namer = StorageNamer::new(dir.path(), DirectoryNaming::Timestamp);

    let result = namer.name_at("../..", fixed_time()).await;

    assert!(matches!(result, Err(UploadStoreError::EmptyFilename(_))));
    assert!(!dir.path().join("2024-03-09 14-05-07").exists());
}

#[tokio::test]
async fn given_upload_root_when_naming_then_path_is_root_directory_filename() {
    let dir = tempfile::TempDir::new().unwrap();
    let namer = StorageNamer::new(dir.path().join("uploads"), DirectoryNaming::Timestamp);

    let stored = namer.name_at("clip.MP4", fixed_time()).await.unwrap();

    let expected = dir
        .path()
        .join("uploads")
        .join("2024-03-09 14-05-07")
        .join("clip.MP4");
    assert_eq!(stored.as_path(), expected);
    assert_eq!(namer.upload_root(), dir.path().join("uploads"));
}

#[test]
fn given_directory_naming_when_deserialized_then_accepts_lowercase_names() {
    #[derive(serde::Deserialize)]
    struct Holder {
        naming: DirectoryNaming,
    }

    let unique: Holder = serde_json::from_str(r#"{"naming":"unique"}"#).unwrap();
    let stamp: Holder = serde_json::from_str(r#"{"naming":"timestamp"}"#).unwrap();

    assert_eq!(unique.naming, DirectoryNaming::Unique);
    assert_eq!(stamp.naming, DirectoryNaming::Timestamp);
}
