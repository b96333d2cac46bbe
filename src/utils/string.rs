/// Split input into lines, keeping each line's terminator
///
/// The last line has no terminator if the input does not end with a newline.
/// Empty input has no lines.
pub fn split_lines_inclusive(input: &str) -> Vec<&str> {
    input.split_inclusive('\n').collect()
}

// TESTS

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_inclusive_empty() {
        assert!(split_lines_inclusive("").is_empty());
    }

    #[test]
    fn test_split_lines_inclusive_only_newline() {
        assert_eq!(split_lines_inclusive("\n"), vec!["\n"]);
    }

    #[test]
    fn test_split_lines_inclusive_no_newline_at_end() {
        assert_eq!(split_lines_inclusive("line 1\nline 2"), vec!["line 1\n", "line 2"]);
    }

    #[test]
    fn test_split_lines_inclusive_keeps_carriage_return() {
        assert_eq!(
            split_lines_inclusive("line 1\r\n\nline 3\n"),
            vec!["line 1\r\n", "\n", "line 3\n"]
        );
    }
}
