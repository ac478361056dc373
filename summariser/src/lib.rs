use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

use hd_lab_summary_model::{
    load_run_config, load_summary_stats, RunResult, CONFIG_FILE, SUMMARY_FILE,
};

/// Rebuild run results by scanning previously produced run directories.
///
/// Immediate subdirectories of the output root are visited in lexicographic
/// order, which becomes the manifest row order. A directory missing either
/// artifact, or whose config cannot be read, is reported and skipped; the
/// scan always continues to the next directory. The engine is never invoked
/// here, so none of the results carry an elapsed time.
pub fn rescan_run_directories(out_root: &Path) -> anyhow::Result<Vec<RunResult>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(out_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to scan output root {}", out_root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let run_dir = entry.path();
        let config_path = run_dir.join(CONFIG_FILE);
        let summary_path = run_dir.join(SUMMARY_FILE);

        if !config_path.exists() || !summary_path.exists() {
            log::warn!("Skipping {}: missing files", run_dir.display());
            continue;
        }

        let config = match load_run_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Skipping {}: {e:#}", run_dir.display());
                continue;
            }
        };
        let stats = load_summary_stats(&summary_path);

        log::info!("Processed {}", run_dir.display());
        results.push(RunResult::new(config, stats, run_dir.to_path_buf()));
    }

    Ok(results)
}
