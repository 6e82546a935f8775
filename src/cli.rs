use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Analyze package dependency graphs
#[derive(Parser, Debug)]
#[command(name = "depgraph")]
#[command(version)]
#[command(about = "Analyze package dependency graphs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the dependency list file (defaults to dependencies.txt)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./depgraph.config.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the dependency graph contains a cycle
    Check,
    /// Compute a dependency-first install order
    Order,
    /// List strongly connected components
    Sccs,
    /// Rank packages by how many packages depend on them directly
    Critical,
    /// List everything a package depends on, directly or indirectly
    Deps {
        /// The package to query
        package: String,
    },
    /// List everything that would break if a package were removed
    Impact {
        /// The package whose removal to simulate
        package: String,
    },
    /// Run every analysis and produce a full report
    Report,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
