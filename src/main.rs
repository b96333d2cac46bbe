mod cli;

use goldrun::checker::{self, Check};
use goldrun::runner::Target;
use std::process;
use tracing::debug;

fn main() {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => {
            cli::report::print_usage_error(&err);
            process::exit(1);
        }
    };

    args.color.apply();
    cli::logging::init(args.verbose);

    if !args.ignored.is_empty() {
        debug!(ignored = ?args.ignored, "ignoring extra arguments");
    }

    let check = Check {
        target: Target::new(&args.target_executable, &args.input_file)
            .with_timeout(args.timeout()),
        expected_output_file: args.expected_output_file.clone(),
    };

    match checker::check(&check) {
        Ok(outcome) => cli::report::print_outcome(&outcome),
        Err(err) => {
            cli::report::print_error(&err);
            process::exit(err.exit_code());
        }
    }
}
