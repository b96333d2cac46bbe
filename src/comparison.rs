use crate::formats::unified;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Passed,
    Failed { diff: String },
}

impl ComparisonOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            Self::Passed => true,
            Self::Failed { diff: _ } => false,
        }
    }
}

/// Compare the actual output of a run against the expected output
///
/// Only exact equality passes. Trailing whitespace and newlines count.
pub fn compare(expected: &str, actual: &str) -> ComparisonOutcome {
    if expected == actual {
        ComparisonOutcome::Passed
    } else {
        ComparisonOutcome::Failed {
            diff: unified::unified_diff(expected, actual),
        }
    }
}

// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::unified::{ACTUAL_LABEL, EXPECTED_LABEL};

    const SAMPLES: [&str; 9] = [
        "",
        "\n",
        "hello",
        "hello\n",
        "hello\n\n",
        "hello \n",
        "hello\r\n",
        "world\n",
        "line 1\nline 2\nline 3\n",
    ];

    #[test]
    fn test_compare_passes_only_on_equality() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(compare(a, b).is_success(), a == b, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_compare_failure_has_labelled_diff() {
        for a in SAMPLES {
            for b in SAMPLES.iter().filter(|b| **b != a) {
                match compare(a, b) {
                    ComparisonOutcome::Failed { diff } => {
                        assert!(diff.contains(EXPECTED_LABEL), "{:?} vs {:?}", a, b);
                        assert!(diff.contains(ACTUAL_LABEL), "{:?} vs {:?}", a, b);
                    }
                    ComparisonOutcome::Passed => panic!("{:?} vs {:?} should fail", a, b),
                }
            }
        }
    }

    #[test]
    fn test_compare_is_idempotent() {
        let first = compare("hello\nthere\n", "hello\nworld\n");
        let second = compare("hello\nthere\n", "hello\nworld\n");

        assert_eq!(first, second);
    }

    #[test]
    fn test_compare_shows_changed_lines() {
        match compare("hello\n", "world\n") {
            ComparisonOutcome::Failed { diff } => {
                assert!(diff.contains("-hello\n"));
                assert!(diff.contains("+world\n"));
            }
            ComparisonOutcome::Passed => panic!("should fail"),
        }
    }
}
