/// Recommended error type for the runner binaries and any orchestration code
/// built on this crate. Compatible with `?` over any error the pipeline
/// produces.
pub type HdLabResult<T> = anyhow::Result<T>;
