use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use hd_lab_core::prelude::{Qdisc, Workload};

mod manifest;
mod report;
mod summary;

pub use manifest::{manifest_columns, write_manifest, write_manifest_file};
pub use report::print_results_table;
pub use summary::{load_summary_stats, SummaryStats};

/// File name of the engine's per-run parameter record.
pub const CONFIG_FILE: &str = "config.json";
/// File name of the engine's per-run text summary.
pub const SUMMARY_FILE: &str = "summary.txt";
/// File name of the aggregated manifest, written under the output root.
pub const MANIFEST_FILE: &str = "manifest.csv";

/// The engine's record of the parameters a run actually used.
///
/// Written by the engine as `config.json` in the run's output directory and
/// read-only to this system. The engine writes more keys than these (seed,
/// request count, hook flags); only the keys carried into the manifest are
/// modeled here and the rest are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// The unique run id, assigned by the engine.
    pub run_id: String,
    pub workload: Workload,
    pub outstanding: u32,
    pub req_bytes: u32,
    pub rsp_bytes: u32,
    pub link_rate: String,
    pub link_delay: String,
    pub mtu: u32,
    pub qdisc: Qdisc,
}

/// Load a run's `config.json`.
///
/// A missing file, malformed JSON, or missing required key is an error here;
/// the caller skips the run and moves on.
pub fn load_run_config(path: &Path) -> anyhow::Result<RunConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open run config at {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse run config at {}", path.display()))?;
    Ok(config)
}

/// One fully processed run: the engine's recorded parameters merged with the
/// stats parsed from its summary.
///
/// Runs that fail produce no `RunResult` and never reach the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub run_id: String,
    pub workload: Workload,
    pub outstanding: u32,
    pub req_bytes: u32,
    pub rsp_bytes: u32,
    pub link_rate: String,
    pub link_delay: String,
    pub mtu: u32,
    pub qdisc: Qdisc,
    pub p50_ns: u64,
    pub p95_ns: u64,
    pub p99_ns: u64,
    pub completed: u64,
    /// The run's output directory, as reported by the engine.
    pub out_dir: PathBuf,
    /// Wall-clock duration of the engine invocation. Only known when this
    /// pipeline drove the run itself; a rescan leaves it unset.
    pub elapsed_s: Option<f64>,
}

impl RunResult {
    /// Merge a run config with its parsed summary stats.
    pub fn new(config: RunConfig, stats: SummaryStats, out_dir: PathBuf) -> Self {
        Self {
            run_id: config.run_id,
            workload: config.workload,
            outstanding: config.outstanding,
            req_bytes: config.req_bytes,
            rsp_bytes: config.rsp_bytes,
            link_rate: config.link_rate,
            link_delay: config.link_delay,
            mtu: config.mtu,
            qdisc: config.qdisc,
            p50_ns: stats.p50_ns,
            p95_ns: stats.p95_ns,
            p99_ns: stats.p99_ns,
            completed: stats.completed,
            out_dir,
            elapsed_s: None,
        }
    }

    /// Record the wall-clock duration of the invocation that produced this
    /// run.
    pub fn with_elapsed(mut self, elapsed_s: f64) -> Self {
        self.elapsed_s = Some(elapsed_s);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CONFIG: &str = r#"{
  "linkRate": "10Gbps",
  "linkDelay": "50us",
  "mtu": 1500,
  "qdisc": "none",
  "workload": "pingpong",
  "nReq": 10000,
  "outstanding": 1,
  "reqBytes": 256,
  "rspBytes": 256,
  "enableEgressHook": true,
  "enableIngressHook": true,
  "hookConfigPath": "",
  "seed": 1,
  "runId": "run-20260806-120000-abcd"
}"#;

    #[test]
    fn loads_engine_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, CONFIG).unwrap();

        let config = load_run_config(&path).unwrap();
        assert_eq!(
            config,
            RunConfig {
                run_id: "run-20260806-120000-abcd".to_string(),
                workload: Workload::Pingpong,
                outstanding: 1,
                req_bytes: 256,
                rsp_bytes: 256,
                link_rate: "10Gbps".to_string(),
                link_delay: "50us".to_string(),
                mtu: 1500,
                qdisc: Qdisc::None,
            }
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(load_run_config(&dir.path().join(CONFIG_FILE)).is_err());
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"runId": "run-1", "workload": "rpc"}"#).unwrap();
        assert!(load_run_config(&path).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_run_config(&path).is_err());
    }

    #[test]
    fn merge_carries_all_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, CONFIG).unwrap();

        let config = load_run_config(&path).unwrap();
        let stats = SummaryStats {
            p50_ns: 100,
            p95_ns: 200,
            p99_ns: 300,
            completed: 10_000,
        };
        let result = RunResult::new(config, stats, PathBuf::from("out/sim/run-1")).with_elapsed(3.5);

        assert_eq!(result.run_id, "run-20260806-120000-abcd");
        assert_eq!(result.p99_ns, 300);
        assert_eq!(result.completed, 10_000);
        assert_eq!(result.elapsed_s, Some(3.5));
    }
}
