use colored::{ColoredString, Colorize};
use goldrun::comparison::ComparisonOutcome;
use goldrun::error::CheckError;
use goldrun::utils::string;

const PASSED_MSG: &str = "Test Passed!";
const FAILED_MSG: &str = "Test Failed! Output does not match the expected output!";

pub fn print_outcome(outcome: &ComparisonOutcome) {
    match outcome {
        ComparisonOutcome::Passed => println!("{}", PASSED_MSG.green()),
        ComparisonOutcome::Failed { diff } => {
            println!("{}", FAILED_MSG.bright_red());
            if !diff.is_empty() {
                print_diff(diff);
            }
        }
    }
}

pub fn print_error(error: &CheckError) {
    println!("{}", error.to_string().bright_red());
}

/// Report invalid command line arguments, including the usage line
pub fn print_usage_error(error: &clap::Error) {
    print!("{}", error); // Already contains newline
}

fn print_diff(diff: &str) {
    for (i, line) in string::split_lines_inclusive(diff).into_iter().enumerate() {
        let content = line.strip_suffix('\n').unwrap_or(line);
        println!("{}", style_diff_line(i, content));
    }
}

fn style_diff_line(index: usize, content: &str) -> ColoredString {
    // The first two lines are the file header
    if index < 2 {
        content.bold()
    } else if content.starts_with("@@") {
        content.cyan()
    } else if content.starts_with('-') {
        content.red()
    } else if content.starts_with('+') {
        content.green()
    } else {
        content.normal()
    }
}
