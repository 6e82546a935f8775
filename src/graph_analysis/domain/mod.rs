pub mod dependency_graph;
pub mod package;
pub mod report_metadata;

pub use dependency_graph::{DependencyGraph, DependencyRecord};
pub use package::PackageName;
pub use report_metadata::ReportMetadata;
