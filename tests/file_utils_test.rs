use goldrun::error::CheckError;
use goldrun::utils::file;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// SECTION: find_executable_path

#[cfg(unix)]
#[test]
fn test_shell_script_exists_in_sub_dir() {
    assert_executable_exists("targets/cat_input.sh");
}

#[cfg(unix)]
#[test]
fn test_shell_script_exists_in_sub_dir_dot_slash() {
    assert_executable_exists("./targets/cat_input.sh");
}

#[test]
fn test_program_exists_in_path() {
    let program = if cfg!(windows) { "cmd" } else { "sh" };

    assert_executable_exists(program);
}

#[test]
fn test_program_exists_at_absolute_path() {
    let path = if cfg!(windows) {
        r"C:\Windows\System32\cmd.exe"
    } else {
        "/bin/sh"
    };

    assert_executable_exists(path);
}

#[test]
fn test_bare_name_is_not_looked_up_in_dir() {
    let helper_dir = project_root().join("tests/targets");

    let result = file::find_executable_path(Path::new("cat_input.sh"), helper_dir);

    assert!(result.is_err());
}

#[test]
fn test_missing_program() {
    let helper_dir = project_root().join("tests/targets");

    let result = file::find_executable_path(Path::new("./does_not_exist.sh"), helper_dir);

    assert!(result.is_err());
}

fn assert_executable_exists(binary_name: &str) {
    let helper_dir = project_root().join("tests");

    let executable_path = file::find_executable_path(Path::new(binary_name), helper_dir).unwrap();

    assert!(executable_path.is_absolute());
}

fn project_root() -> std::path::PathBuf {
    env::current_dir().unwrap() // Returns path to project root
}

// SECTION: read_expected

#[test]
fn test_read_expected_keeps_content_exactly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expected.txt");
    fs::write(&path, "line 1\r\nline 2\n\n").unwrap();

    assert_eq!(file::read_expected(&path).unwrap(), "line 1\r\nline 2\n\n");
}

#[test]
fn test_read_expected_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expected.txt");
    fs::write(&path, "").unwrap();

    assert_eq!(file::read_expected(&path).unwrap(), "");
}

#[test]
fn test_read_expected_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = file::read_expected(&path).unwrap_err();

    assert!(matches!(err, CheckError::FailedToReadFile { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_read_expected_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expected.txt");
    fs::write(&path, [0xff, 0xfe]).unwrap();

    let err = file::read_expected(&path).unwrap_err();

    assert!(matches!(err, CheckError::FailedToReadFile { .. }));
}
