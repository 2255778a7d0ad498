use std::fs;

use shortly_client::AtomicFileWriter;
use tempfile::TempDir;

#[test]
fn write_creates_a_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());

    let writer = AtomicFileWriter::new(new_dir.clone());
    let path = writer.write("history.ron", "(completed: [])").unwrap();

    assert!(new_dir.is_dir());
    assert_eq!(fs::read_to_string(path).unwrap(), "(completed: [])");
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("history.ron", "(completed: [])").unwrap();
    assert_eq!(first.file_name().unwrap(), "history.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(completed: [])");

    // A later snapshot replaces the file in place.
    let second = writer.write("history.ron", "(completed: [1])").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(completed: [1])");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("history.ron", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("history.ron").exists());
}
