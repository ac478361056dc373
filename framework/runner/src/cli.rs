use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct MatrixRunnerCli {
    /// Path to the engine executable.
    ///
    /// Takes precedence over the `HD_LAB_ENGINE_PATH` environment variable
    /// and the `PATH` lookup.
    #[clap(long)]
    pub engine: Option<PathBuf>,

    /// Root directory the engine writes run directories into. The manifest
    /// is written here as well.
    #[clap(long, default_value = "out/sim")]
    pub out_dir: PathBuf,

    /// The number of requests to issue per run
    #[clap(long, default_value = "10000")]
    pub n_req: u32,

    /// Do not show a progress bar on the CLI.
    ///
    /// This is recommended for CI/CD environments where the progress bar isn't being looked at by anyone and is just adding noise to the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,
}
