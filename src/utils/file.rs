use crate::error::CheckError;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the expected output from `path`
///
/// The whole file must be readable and valid UTF-8.
pub fn read_expected<P>(path: P) -> Result<String, CheckError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|source| CheckError::FailedToReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Find absolute path to executable
///
/// A program containing a path separator is looked up relative to `in_dir`.
/// Otherwise, looks for executable in PATH.
pub fn find_executable_path<P>(program: &Path, in_dir: P) -> Result<PathBuf, which::Error>
where
    P: AsRef<Path>,
{
    if program.components().count() > 1 || program.is_absolute() {
        which::which_in(program, None::<&str>, in_dir)
    } else {
        which::which(program)
    }
}
