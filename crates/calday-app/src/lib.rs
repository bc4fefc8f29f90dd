//! Command-line front end for `calday-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
