use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
///
/// Selects where the formatted report ends up: a file when an output path
/// is given, stdout otherwise.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the given optional output path
    pub fn create(output_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output_path {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_presenter_writes_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("report.md");

        let presenter = PresenterFactory::create(Some(output_path.clone()));
        presenter.present("content").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "content");
    }

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(None);
        assert!(presenter.present("content\n").is_ok());
    }
}
