use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A named request/response traffic pattern driving the simulated exchange.
///
/// The engine accepts exactly these tags on its `--workload` flag and echoes
/// them back in `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Strict alternation, one exchange completes before the next starts.
    #[display("pingpong")]
    Pingpong,
    /// RPC-style exchange with a window of in-flight requests.
    #[display("rpc")]
    Rpc,
}

/// The queueing discipline applied at the simulated egress point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qdisc {
    #[display("none")]
    None,
    #[display("fq_codel")]
    FqCodel,
}

/// The parameters for a single engine invocation.
///
/// One value drives exactly one run. Immutable once generated by
/// [crate::matrix::MatrixConfig::matrix].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub workload: Workload,
    pub outstanding: u32,
    pub req_bytes: u32,
    pub rsp_bytes: u32,
    pub link_rate: String,
    pub link_delay: String,
    pub mtu: u32,
    pub qdisc: Qdisc,
}
