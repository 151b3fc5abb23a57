pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod source;
pub mod validation;
