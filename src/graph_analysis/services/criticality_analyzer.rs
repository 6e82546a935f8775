use crate::graph_analysis::domain::{DependencyGraph, PackageName};

/// Result of a criticality analysis: the most depended-upon packages, the
/// maximum in-degree, and the full in-degree table in node-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalityReport {
    critical: Vec<PackageName>,
    max_in_degree: usize,
    in_degree: Vec<(PackageName, usize)>,
}

impl CriticalityReport {
    pub fn critical(&self) -> &[PackageName] {
        &self.critical
    }

    pub fn max_in_degree(&self) -> usize {
        self.max_in_degree
    }

    pub fn in_degree(&self) -> &[(PackageName, usize)] {
        &self.in_degree
    }

    pub fn in_degree_of(&self, package: &PackageName) -> Option<usize> {
        self.in_degree
            .iter()
            .find(|(name, _)| name == package)
            .map(|(_, count)| *count)
    }
}

/// CriticalityAnalyzer service identifying the most depended-upon packages
///
/// A package's in-degree counts its distinct direct dependents (edges are
/// deduplicated at graph construction). Every known node starts at zero, so
/// leaf-only targets and dependent-less keys are part of the table.
pub struct CriticalityAnalyzer;

impl CriticalityAnalyzer {
    /// Computes the in-degree table, the maximum in-degree, and the set of
    /// packages at that maximum.
    ///
    /// An empty graph yields max 0 and an empty critical set; a non-empty
    /// graph without edges yields max 0 with every package critical. Neither
    /// case is an error.
    pub fn critical_packages(graph: &DependencyGraph) -> CriticalityReport {
        let mut counts: Vec<usize> = vec![0; graph.package_count()];
        let index: std::collections::HashMap<&PackageName, usize> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect();

        for node in graph.nodes() {
            for dependency in graph.neighbors(node) {
                counts[index[dependency]] += 1;
            }
        }

        let max_in_degree = counts.iter().copied().max().unwrap_or(0);

        let in_degree: Vec<(PackageName, usize)> = graph
            .nodes()
            .iter()
            .cloned()
            .zip(counts.iter().copied())
            .collect();

        let critical: Vec<PackageName> = in_degree
            .iter()
            .filter(|(_, count)| *count == max_in_degree)
            .map(|(name, _)| name.clone())
            .collect();

        CriticalityReport {
            critical,
            max_in_degree,
            in_degree,
        }
    }
}
