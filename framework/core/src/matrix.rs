use itertools::iproduct;

use crate::params::{ParameterSet, Qdisc, Workload};

/// Immutable description of an experiment matrix.
///
/// Holds the fixed network parameters and the dimension lists that are
/// enumerated into the cartesian product. This is passed into the runner
/// explicitly so that test runs can use a reduced matrix.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub link_rate: String,
    pub link_delay: String,
    pub mtu: u32,
    pub qdisc: Qdisc,
    pub workloads: Vec<Workload>,
    pub outstanding: Vec<u32>,
    /// Request/response payload size pairs, in bytes.
    pub sizes: Vec<(u32, u32)>,
    /// Number of requests issued per run.
    pub n_req: u32,
}

impl Default for MatrixConfig {
    /// The baseline matrix: 2 workloads x 3 outstanding levels x 3 sizes
    /// over a 10Gbps/50us link.
    fn default() -> Self {
        Self {
            link_rate: "10Gbps".to_string(),
            link_delay: "50us".to_string(),
            mtu: 1500,
            qdisc: Qdisc::None,
            workloads: vec![Workload::Pingpong, Workload::Rpc],
            outstanding: vec![1, 8, 32],
            sizes: vec![(256, 256), (1024, 1024), (4096, 4096)],
            n_req: 10_000,
        }
    }
}

impl MatrixConfig {
    /// The number of runs this matrix produces.
    pub fn total_runs(&self) -> usize {
        self.workloads.len() * self.outstanding.len() * self.sizes.len()
    }

    /// Enumerate the full cartesian product as an ordered sequence.
    ///
    /// Nesting is workload, then outstanding, then size, each dimension in
    /// declaration order. The same matrix always enumerates in the same
    /// order, so manifest rows line up across repeated invocations.
    pub fn matrix(&self) -> Vec<ParameterSet> {
        iproduct!(&self.workloads, &self.outstanding, &self.sizes)
            .map(
                |(&workload, &outstanding, &(req_bytes, rsp_bytes))| ParameterSet {
                    workload,
                    outstanding,
                    req_bytes,
                    rsp_bytes,
                    link_rate: self.link_rate.clone(),
                    link_delay: self.link_delay.clone(),
                    mtu: self.mtu,
                    qdisc: self.qdisc,
                },
            )
            .collect()
    }
}
