mod cli;
mod engine;
mod executor;
mod init;
mod run;
mod types;

pub mod prelude {
    pub use crate::cli::MatrixRunnerCli;
    pub use crate::engine::{engine_path, HD_LAB_ENGINE_PATH_ENV};
    pub use crate::executor::execute_run;
    pub use crate::init::init;
    pub use crate::run::run_matrix;
    pub use crate::types::HdLabResult;
}
