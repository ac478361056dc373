use std::path::PathBuf;

use log::debug;

use hd_lab_summariser::rescan_run_directories;
use hd_lab_summary_model::{print_results_table, write_manifest_file, MANIFEST_FILE};

/// Environment variable name to set a custom output root to scan
const OUT_DIR_ENV: &str = "HD_LAB_OUT_DIR";
/// Default output root, matching the live runner's default
const DEFAULT_OUT_DIR: &str = "out/sim";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::var(OUT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUT_DIR));
    debug!("Rescanning run directories under {}", out_dir.display());

    let results = rescan_run_directories(&out_dir)?;

    // A rescan never knows wall-clock durations, so the manifest omits the
    // elapsed column entirely.
    let manifest_path = out_dir.join(MANIFEST_FILE);
    write_manifest_file(&manifest_path, &results, false)?;

    println!("\nManifest written to: {}", manifest_path.display());
    println!("  Total runs: {}", results.len());

    if results.is_empty() {
        log::warn!("No run directory produced a result");
    } else {
        print_results_table(&results);
    }

    Ok(())
}
