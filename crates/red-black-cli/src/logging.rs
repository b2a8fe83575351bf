use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::options::Options;

/// Installs a global stderr subscriber filtered by `RUST_LOG`, falling back
/// to the level from the options.
pub fn init(opts: &Options) -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(opts.log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
