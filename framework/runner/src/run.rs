use anyhow::Context;
use indicatif::ProgressBar;

use hd_lab_core::prelude::MatrixConfig;
use hd_lab_summary_model::{
    print_results_table, write_manifest_file, RunResult, MANIFEST_FILE,
};

use crate::cli::MatrixRunnerCli;
use crate::engine::engine_path;
use crate::executor::execute_run;
use crate::types::HdLabResult;

/// Drive the full experiment matrix and write the manifest.
///
/// Runs execute one at a time, in matrix enumeration order, and each engine
/// invocation blocks until its run completes. A failed run is reported and
/// skipped; zero successful runs across the whole matrix is fatal.
pub fn run_matrix(cli: MatrixRunnerCli, config: MatrixConfig) -> HdLabResult<()> {
    let engine = match cli.engine {
        Some(engine) => engine,
        None => engine_path()?,
    };

    let matrix = config.matrix();
    let total_runs = matrix.len();

    println!("hd-lab experiment matrix");
    println!("Total runs: {total_runs}");
    println!("  Workloads: {}", join(&config.workloads));
    println!("  Outstanding: {}", join(&config.outstanding));
    println!(
        "  Sizes: {}",
        config
            .sizes
            .iter()
            .map(|(req, _)| format!("{req}B"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    // The engine creates each run's directory itself; only the root is
    // created here.
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create output root {}", cli.out_dir.display()))?;

    let progress = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total_runs as u64)
    };

    let mut results: Vec<RunResult> = Vec::new();
    for (index, params) in matrix.iter().enumerate() {
        let run_number = index + 1;
        log::info!(
            "Run {run_number}/{total_runs}: {workload}, out={outstanding}, req/rsp={req_bytes}B",
            workload = params.workload,
            outstanding = params.outstanding,
            req_bytes = params.req_bytes,
        );

        match execute_run(&engine, params, config.n_req, &cli.out_dir) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::error!("Run {run_number}/{total_runs} failed, skipping: {e:#}");
            }
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    if results.is_empty() {
        anyhow::bail!("No successful runs out of {total_runs}");
    }

    let manifest_path = cli.out_dir.join(MANIFEST_FILE);
    write_manifest_file(&manifest_path, &results, true)?;

    println!("\nExperiment matrix complete!");
    println!("Successful runs: {}/{}", results.len(), total_runs);
    println!("Manifest written to: {}", manifest_path.display());
    print_results_table(&results);

    Ok(())
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
