//! Application service layer - quote use case, config, job files, export

pub mod app;
pub mod config;
pub mod export;
pub mod job_file;
