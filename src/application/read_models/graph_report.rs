//! Analysis report read model
//!
//! A denormalized, formatter-facing view of one analysis run. The use case
//! populates only the sections the requested query asked for; formatters
//! render whatever is present. Package names are plain strings here - the
//! read model sits on the presentation side of the boundary.

/// Outcome of the install-order analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOrderSection {
    /// A valid order, dependencies first
    Ordered(Vec<String>),
    /// The graph is cyclic; no total order exists
    Unresolvable,
}

/// Criticality analysis results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalitySection {
    /// Packages whose in-degree equals the maximum
    pub critical: Vec<String>,
    /// The maximum in-degree across all packages
    pub max_in_degree: usize,
    /// Full in-degree table in node-insertion order
    pub in_degree: Vec<(String, usize)>,
}

/// Result of a per-package query (transitive dependencies or removal impact).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuerySection {
    /// The package the query was about
    pub package: String,
    /// Whether the package appears anywhere in the graph
    pub known: bool,
    /// The resulting package set, in discovery order
    pub packages: Vec<String>,
}

/// Main read model for analysis results
#[derive(Debug, Clone, Default)]
pub struct GraphReport {
    /// Number of packages in the graph
    pub package_count: usize,
    /// Number of distinct dependency edges
    pub edge_count: usize,
    /// Cycle check result
    pub cycle_detected: Option<bool>,
    /// Strongly connected components (full partition, singletons included)
    pub sccs: Option<Vec<Vec<String>>>,
    /// Install order outcome
    pub install_order: Option<InstallOrderSection>,
    /// Criticality analysis
    pub criticality: Option<CriticalitySection>,
    /// Transitive dependency query result
    pub dependencies: Option<PackageQuerySection>,
    /// Removal impact query result
    pub impact: Option<PackageQuerySection>,
}

impl GraphReport {
    pub fn new(package_count: usize, edge_count: usize) -> Self {
        Self {
            package_count,
            edge_count,
            ..Self::default()
        }
    }

    /// True if no analysis section is populated (nothing to render beyond
    /// the graph summary).
    pub fn is_summary_only(&self) -> bool {
        self.cycle_detected.is_none()
            && self.sccs.is_none()
            && self.install_order.is_none()
            && self.criticality.is_none()
            && self.dependencies.is_none()
            && self.impact.is_none()
    }
}
