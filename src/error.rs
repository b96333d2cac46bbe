use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Fatal conditions that stop a check before a comparison can be reported
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to read from {path}! (error message: {source})")]
    FailedToReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Timeout occurred! (error message: '{program}' timed out after {timeout:?})")]
    Timeout { program: String, timeout: Duration },

    #[error("Failed to run {program}! (error message: {source})")]
    FailedToSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run {program}! (error message: {source})")]
    ProgramNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to run {program}! (error message: {stream} is not valid UTF-8)")]
    FailedToDecodeOutput {
        program: String,
        stream: &'static str,
    },

    #[error("Failed to run {program}! (error message: process was terminated without an exit code)")]
    MissingExitCode { program: String },

    #[error("Failed to run {program}! (error message: {source})")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} failed! (return code: {code}) (error output: {stderr})")]
    NonZeroExit {
        program: String,
        code: i32,
        stderr: String,
    },
}

impl CheckError {
    /// Exit status the harness terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NonZeroExit { code, .. } => *code,
            _ => 1,
        }
    }
}

// TESTS
