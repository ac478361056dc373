use clap::Parser;

use crate::cli::MatrixRunnerCli;

/// Initialise the CLI and logging for the matrix runner.
pub fn init() -> MatrixRunnerCli {
    env_logger::init();

    MatrixRunnerCli::parse()
}
