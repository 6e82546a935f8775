//! depgraph - Dependency graph analysis tool for package managers
//!
//! This library analyzes package dependency graphs loaded from plain-text
//! dependency lists, following hexagonal architecture and Domain-Driven
//! Design principles. It detects cycles, discovers strongly connected
//! components, computes install orders, ranks packages by criticality, and
//! simulates the impact of removing a package.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dependency_source = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeGraphUseCase::new(dependency_source, progress_reporter);
//!
//! // Execute
//! let request = AnalysisRequest::new(
//!     PathBuf::from("dependencies.txt"),
//!     AnalysisQuery::Full,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = MarkdownFormatter::new();
//! let output = formatter.format(&response.report, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        AnalysisQuery, AnalysisRequest, AnalysisResponse, OutputFormat,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory};
    pub use crate::application::read_models::GraphReport;
    pub use crate::application::use_cases::AnalyzeGraphUseCase;
    pub use crate::graph_analysis::domain::{
        DependencyGraph, DependencyRecord, PackageName, ReportMetadata,
    };
    pub use crate::graph_analysis::services::{
        CriticalityAnalyzer, CycleDetector, DependencyQuery, ImpactSimulator, InstallSequencer,
        SccFinder,
    };
    pub use crate::ports::inbound::GraphAnalysisPort;
    pub use crate::ports::outbound::{
        DependencySource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
