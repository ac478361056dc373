use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{bail, Context};

use hd_lab_core::prelude::ParameterSet;
use hd_lab_summary_model::{
    load_run_config, load_summary_stats, RunResult, CONFIG_FILE, SUMMARY_FILE,
};

/// Stdout marker preceding the engine-assigned run id.
const RUN_ID_MARKER: &str = "Run ID:";
/// Stdout marker preceding the run's output directory.
const OUT_DIR_MARKER: &str = "Results written to:";

/// Build the engine's argument list for one parameter set.
///
/// `--runId=auto` asks the engine to assign the run id itself; the id is
/// scraped back out of stdout after the run completes.
pub(crate) fn engine_args(params: &ParameterSet, n_req: u32, out_root: &Path) -> Vec<String> {
    vec![
        format!("--linkRate={}", params.link_rate),
        format!("--linkDelay={}", params.link_delay),
        format!("--mtu={}", params.mtu),
        format!("--qdisc={}", params.qdisc),
        format!("--workload={}", params.workload),
        format!("--nReq={n_req}"),
        format!("--outstanding={}", params.outstanding),
        format!("--reqBytes={}", params.req_bytes),
        format!("--rspBytes={}", params.rsp_bytes),
        "--enableEgressHook=1".to_string(),
        "--enableIngressHook=1".to_string(),
        "--runId=auto".to_string(),
        format!("--outDir={}", out_root.display()),
    ]
}

/// Extract the trimmed text following `marker` from the first line of
/// `stdout` that carries it.
fn extract_marker(stdout: &str, marker: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.split_once(marker).map(|(_, rest)| rest.trim().to_string()))
}

/// Invoke the engine once for `params`, blocking until the run completes,
/// and load the artifacts it reports.
///
/// The engine creates the run's output directory under `out_root` as a side
/// effect; only its location is recovered here, from the stdout markers.
/// Any failure is an error for this run alone and the caller continues with
/// the rest of the matrix.
pub fn execute_run(
    engine: &Path,
    params: &ParameterSet,
    n_req: u32,
    out_root: &Path,
) -> anyhow::Result<RunResult> {
    let started = Instant::now();
    let output = Command::new(engine)
        .args(engine_args(params, n_req, out_root))
        .output()
        .with_context(|| format!("Failed to execute engine at {}", engine.display()))?;
    let elapsed_s = started.elapsed().as_secs_f64();

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        bail!(
            "Engine exited with {status}\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}",
            status = output.status,
            stderr = String::from_utf8_lossy(&output.stderr),
        );
    }

    let run_id = extract_marker(&stdout, RUN_ID_MARKER);
    let out_dir = extract_marker(&stdout, OUT_DIR_MARKER);
    let (run_id, out_dir) = match (run_id, out_dir) {
        (Some(run_id), Some(out_dir)) => (run_id, PathBuf::from(out_dir)),
        _ => bail!("Could not extract run ID from engine output:\n{stdout}"),
    };

    log::info!(
        "Run {run_id} completed in {elapsed_s:.1}s, results in {}",
        out_dir.display()
    );

    let config = load_run_config(&out_dir.join(CONFIG_FILE))?;
    let stats = load_summary_stats(&out_dir.join(SUMMARY_FILE));

    Ok(RunResult::new(config, stats, out_dir).with_elapsed(elapsed_s))
}

#[cfg(test)]
mod tests {
    use hd_lab_core::prelude::{MatrixConfig, Qdisc, Workload};

    use super::*;

    #[test]
    fn extracts_marker_content() {
        let stdout = "\
some engine noise

Run ID: run-20260806-120000-abcd

Results written to: out/sim/run-20260806-120000-abcd
";
        assert_eq!(
            extract_marker(stdout, RUN_ID_MARKER).as_deref(),
            Some("run-20260806-120000-abcd")
        );
        assert_eq!(
            extract_marker(stdout, OUT_DIR_MARKER).as_deref(),
            Some("out/sim/run-20260806-120000-abcd")
        );
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(extract_marker("no markers here\n", RUN_ID_MARKER), None);
    }

    #[test]
    fn args_cover_every_engine_flag() {
        let params = ParameterSet {
            workload: Workload::Rpc,
            outstanding: 8,
            req_bytes: 1024,
            rsp_bytes: 2048,
            link_rate: "10Gbps".to_string(),
            link_delay: "50us".to_string(),
            mtu: 1500,
            qdisc: Qdisc::FqCodel,
        };
        let args = engine_args(&params, 10_000, Path::new("out/sim"));
        assert_eq!(
            args,
            vec![
                "--linkRate=10Gbps",
                "--linkDelay=50us",
                "--mtu=1500",
                "--qdisc=fq_codel",
                "--workload=rpc",
                "--nReq=10000",
                "--outstanding=8",
                "--reqBytes=1024",
                "--rspBytes=2048",
                "--enableEgressHook=1",
                "--enableIngressHook=1",
                "--runId=auto",
                "--outDir=out/sim",
            ]
        );
    }

    #[test]
    fn args_line_up_with_the_matrix() {
        let config = MatrixConfig::default();
        for params in config.matrix() {
            let args = engine_args(&params, config.n_req, Path::new("out/sim"));
            assert_eq!(args.len(), 13);
            assert!(args.contains(&format!("--workload={}", params.workload)));
            assert!(args.contains(&format!("--outstanding={}", params.outstanding)));
        }
    }
}
