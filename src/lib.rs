pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra {
    pub mod pages;
    pub mod prompt_adapter;
    pub mod s3_adapter;
}
pub mod ports;
pub mod start;
pub mod utils {
    pub mod log_utils;
    pub mod path_utils;
}

pub use app::CommandOutcome;
pub use args::Args;
pub use errors::CloudPhotoError;
pub use start::run_app;
