use crate::comparison::{self, ComparisonOutcome};
use crate::error::CheckError;
use crate::runner::{self, Target};
use crate::utils::file;
use std::path::PathBuf;
use tracing::debug;

/// One invocation of the harness, as given on the command line
#[derive(Clone, Debug)]
pub struct Check {
    pub target: Target,
    pub expected_output_file: PathBuf,
}

/// Read the expected output, run the target and compare the two
///
/// A target exiting with a non-zero code fails the check before any
/// comparison is made. A content mismatch is not an error: it is reported as
/// `ComparisonOutcome::Failed`.
pub fn check(check: &Check) -> Result<ComparisonOutcome, CheckError> {
    let expected = file::read_expected(&check.expected_output_file)?;
    debug!(
        path = %check.expected_output_file.display(),
        bytes = expected.len(),
        "read expected output"
    );

    let result = runner::run(&check.target)?;

    if result.exit_code != 0 {
        return Err(CheckError::NonZeroExit {
            program: check.target.program.display().to_string(),
            code: result.exit_code,
            stderr: result.stderr,
        });
    }

    let outcome = comparison::compare(&expected, &result.stdout);
    debug!(passed = outcome.is_success(), "compared output");

    Ok(outcome)
}

// TESTS
