use crate::graph_analysis::domain::DependencyRecord;
use crate::ports::outbound::DependencySource;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB) - dependency lists are small
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// FileSystemReader adapter for reading dependency lists from the file
/// system
///
/// Implements the DependencySource port. The expected format is
/// line-oriented: `<package> <dep1> <dep2> ...`, one record per line,
/// whitespace-separated. Blank lines are skipped; a line with a single
/// token declares a package without dependencies.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| DepGraphError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: "Security: input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            DepGraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Parses line-oriented records: first token is the package, remaining
    /// tokens are its direct dependencies.
    fn parse_records(content: &str) -> Vec<DependencyRecord> {
        content
            .lines()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                let package = tokens.next()?;
                Some(DependencyRecord::new(
                    package.to_string(),
                    tokens.map(str::to_string).collect(),
                ))
            })
            .collect()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencySource for FileSystemReader {
    fn read_dependency_list(&self, path: &Path) -> Result<Vec<DependencyRecord>> {
        if !path.exists() {
            return Err(DepGraphError::InputFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Dependency list \"{}\" does not exist.\n   \
                     Create a text file with one record per line (\"<package> <dep1> <dep2> ...\"), \
                     or point at an existing one with the --input option.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        Ok(Self::parse_records(&content))
    }
}
