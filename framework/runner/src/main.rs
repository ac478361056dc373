use hd_lab_core::prelude::MatrixConfig;
use hd_lab_runner::prelude::*;

fn main() -> HdLabResult<()> {
    let cli = init();

    // The baseline matrix with the request count from the CLI. Everything
    // else about the matrix is fixed for the experiment campaign.
    let config = MatrixConfig {
        n_req: cli.n_req,
        ..Default::default()
    };

    run_matrix(cli, config)
}
