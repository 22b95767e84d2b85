//! CLI module for the Mint demo server
//!
//! - `serve`: run the HTTP API
//! - `preview`: print generator output, bypassing the cache

pub mod preview;
pub mod serve;

use clap::{Parser, Subcommand};

/// Mint demo API - mock invoices, agent logs and treasury metrics
#[derive(Parser)]
#[command(name = "mint-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,

    /// Print generated invoices or agent logs as JSON
    Preview(preview::PreviewArgs),
}
