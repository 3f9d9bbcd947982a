//! CLI library for testing purposes

pub mod commands;
pub mod config_file;
pub mod exit_status;
pub mod options;
pub mod report;

pub use config_file::ConfigFile;
pub use exit_status::ExitStatus;
pub use options::{CommonOptions, Settings, resolve};
