use std::io;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Set up logging to stderr, keeping stdout for the test report
///
/// `RUST_LOG` takes precedence over the level chosen by `verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
