use depgraph::prelude::*;
use std::path::Path;

/// Mock DependencySource for testing that serves in-memory records
pub struct MockDependencySource {
    records: Vec<DependencyRecord>,
    should_fail: bool,
}

impl MockDependencySource {
    pub fn new(records: &[(&str, &[&str])]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(package, dependencies)| {
                    DependencyRecord::new(
                        package.to_string(),
                        dependencies.iter().map(|d| d.to_string()).collect(),
                    )
                })
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
        }
    }
}

impl DependencySource for MockDependencySource {
    fn read_dependency_list(&self, _path: &Path) -> Result<Vec<DependencyRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock dependency source failure");
        }
        Ok(self.records.clone())
    }
}
