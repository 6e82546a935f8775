use crate::graph_analysis::domain::DependencyRecord;
use crate::shared::Result;
use std::path::Path;

/// DependencySource port for reading dependency list contents
///
/// This port abstracts where the dependency list comes from (file system,
/// test double, etc.) and yields parsed records ready for graph
/// construction.
pub trait DependencySource {
    /// Reads and parses the dependency list at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the dependency list file
    ///
    /// # Returns
    /// One record per non-blank input line
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_dependency_list(&self, path: &Path) -> Result<Vec<DependencyRecord>>;
}
