pub mod logging;
pub mod report;

use clap::error::ErrorKind;
use clap::Parser;
use goldrun::runner;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Parse command line arguments
///
/// Help and version requests exit the process right away. Every other parse
/// failure is returned so the caller can report it.
pub fn parse() -> Result<Args, clap::Error> {
    Args::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => err,
    })
}

/// Golden output check for a single executable
#[derive(Parser)]
#[clap(bin_name = "goldrun", version)]
pub struct Args {
    /// Program to test, called with the input file as its only argument
    pub target_executable: PathBuf,

    /// Input file passed to the program
    pub input_file: PathBuf,

    /// File containing the expected standard output of the program
    pub expected_output_file: PathBuf,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,

    /// Seconds to wait for the program before giving up
    #[arg(long, value_name = "SECONDS", default_value_t = runner::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Options: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Print extra information about each step
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Apply the choice to all colored output of this process
    pub fn apply(self) {
        match self {
            Self::Auto => {} // Decided by `colored` from the environment
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = &'static str;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("Invalid color choice"),
        }
    }
}

// TESTS
