//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod normalize;
pub mod serve;

/// Query Builder - backend for the knowledge graph query builder
#[derive(Parser)]
#[command(name = "qb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Normalize raw type records from a JSON file
    Normalize(normalize::NormalizeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Normalize(args) => normalize::execute(args),
        }
    }
}
