use crate::utils::string;

pub const EXPECTED_LABEL: &str = "expected_output";
pub const ACTUAL_LABEL: &str = "actual_output";

/// Number of unchanged lines shown around each change
pub const CONTEXT_LINES: usize = 3;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Line<'a> {
    Context(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

impl Line<'_> {
    fn is_change(&self) -> bool {
        !matches!(self, Self::Context(_))
    }
}

/// A line together with its position on both sides, before it is applied
#[derive(Clone, Copy)]
struct Op<'a> {
    line: Line<'a>,
    old_index: usize,
    new_index: usize,
}

/// Render a unified diff of `expected` against `actual`
///
/// Lines keep their terminators, so a missing newline at the end of one side
/// is a difference. Returns an empty string when both sides are equal.
///
/// The LCS table built by `diff::slice` covers the lines left after trimming
/// the common prefix and suffix, so memory grows with the product of the
/// differing line counts. Outputs that differ at both ends over tens of
/// thousands of lines need gigabytes.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    let expected_lines = string::split_lines_inclusive(expected);
    let actual_lines = string::split_lines_inclusive(actual);

    let ops = diff_ops(&expected_lines, &actual_lines);
    let hunks = group_hunks(&ops, CONTEXT_LINES);

    if hunks.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(&format!("--- {}\n", EXPECTED_LABEL));
    output.push_str(&format!("+++ {}\n", ACTUAL_LABEL));

    for hunk in hunks {
        write_hunk(&mut output, hunk);
    }

    output
}

fn diff_ops<'a>(expected: &[&'a str], actual: &[&'a str]) -> Vec<Op<'a>> {
    let mut ops = vec![];
    let mut old_index = 0;
    let mut new_index = 0;

    for result in diff::slice(expected, actual) {
        let line = match result {
            diff::Result::Both(line, _) => Line::Context(*line),
            diff::Result::Left(line) => Line::Removed(*line),
            diff::Result::Right(line) => Line::Added(*line),
        };

        ops.push(Op {
            line,
            old_index,
            new_index,
        });

        match line {
            Line::Context(_) => {
                old_index += 1;
                new_index += 1;
            }
            Line::Removed(_) => old_index += 1,
            Line::Added(_) => new_index += 1,
        }
    }

    ops
}

/// Split the ops into hunks of changes with `context` lines around them
///
/// Two changes share a hunk unless more than `2 * context` unchanged lines
/// separate them.
fn group_hunks<'a, 'b>(ops: &'b [Op<'a>], context: usize) -> Vec<&'b [Op<'a>]> {
    let changes: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| op.line.is_change())
        .map(|(i, _)| i)
        .collect();

    let mut hunks = vec![];
    let mut iter = changes.into_iter().peekable();

    while let Some(first) = iter.next() {
        let mut last = first;
        while let Some(&next) = iter.peek() {
            if next - last - 1 > 2 * context {
                break;
            }
            last = next;
            iter.next();
        }

        let start = first.saturating_sub(context);
        let end = (last + 1 + context).min(ops.len());
        hunks.push(&ops[start..end]);
    }

    hunks
}

fn write_hunk(output: &mut String, hunk: &[Op]) {
    let (old_start, new_start) = match hunk.first() {
        Some(op) => (op.old_index, op.new_index),
        None => return,
    };
    let old_len = hunk
        .iter()
        .filter(|op| !matches!(op.line, Line::Added(_)))
        .count();
    let new_len = hunk
        .iter()
        .filter(|op| !matches!(op.line, Line::Removed(_)))
        .count();

    output.push_str(&format!(
        "@@ -{} +{} @@\n",
        format_range(old_start, old_len),
        format_range(new_start, new_len)
    ));

    for op in hunk {
        let (prefix, line) = match op.line {
            Line::Context(line) => (' ', line),
            Line::Removed(line) => ('-', line),
            Line::Added(line) => ('+', line),
        };

        output.push(prefix);
        output.push_str(line);

        if !line.ends_with('\n') {
            output.push('\n');
            output.push_str(NO_NEWLINE_MARKER);
            output.push('\n');
        }
    }
}

/// Format a hunk range, 1-based, omitting the length when it is one
fn format_range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{},0", start),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, len),
    }
}

// TESTS
