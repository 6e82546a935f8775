use std::path::PathBuf;

/// The analysis a caller wants to run against the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisQuery {
    /// Report whether the graph contains a dependency cycle
    Check,
    /// Produce a valid install order (fails on a cyclic graph)
    InstallOrder,
    /// Partition the graph into strongly connected components
    Sccs,
    /// Identify the most depended-upon packages
    Critical,
    /// List all direct and transitive dependencies of a package
    Dependencies(String),
    /// List every package affected by removing a package
    Impact(String),
    /// Run every analysis and produce the full report
    Full,
}

/// AnalysisRequest - Internal request DTO for the analysis use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to the dependency list file
    pub input_path: PathBuf,
    /// Which analysis to run
    pub query: AnalysisQuery,
}

impl AnalysisRequest {
    pub fn new(input_path: PathBuf, query: AnalysisQuery) -> Self {
        Self { input_path, query }
    }
}
