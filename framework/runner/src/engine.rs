use std::env;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;

use crate::types::HdLabResult;

/// Environment variable to override the path to the engine executable used
/// to run experiments.
pub const HD_LAB_ENGINE_PATH_ENV: &str = "HD_LAB_ENGINE_PATH";

/// Get the path to the engine executable.
///
/// If the [`HD_LAB_ENGINE_PATH_ENV`] environment variable is set, its value
/// is used as the path to the engine. If it is not set, the default value
/// "hd_runner" is used, which assumes that the binary is available in the
/// system's PATH.
pub fn engine_path() -> HdLabResult<PathBuf> {
    match env::var(HD_LAB_ENGINE_PATH_ENV).ok().as_deref() {
        Some("") => {
            bail!("'{HD_LAB_ENGINE_PATH_ENV}' set to empty string");
        }
        Some("hd_runner") | None => {
            log::warn!("'{HD_LAB_ENGINE_PATH_ENV}' is not a path so looking in user's 'PATH'");
            which::which("hd_runner").with_context(|| {
                format!(
                    "Engine binary not found in PATH. Please build the engine or set '{HD_LAB_ENGINE_PATH_ENV}' to the correct path."
                )
            })
        }
        Some(path) => {
            let engine_path = PathBuf::from(path);
            if !engine_path.exists() {
                bail!(
                    "Path to engine binary overwritten with '{HD_LAB_ENGINE_PATH_ENV}={path}' but that path doesn't exist",
                    path = engine_path.display()
                );
            }
            Ok(engine_path)
        }
    }
}
