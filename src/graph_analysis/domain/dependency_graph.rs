use super::PackageName;
use crate::shared::Result;
use std::collections::HashMap;

/// One parsed line of a dependency list: a package and its declared
/// direct dependencies. Produced by a `DependencySource` adapter and
/// consumed only at the graph construction boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub package: String,
    pub dependencies: Vec<String>,
}

impl DependencyRecord {
    pub fn new(package: String, dependencies: Vec<String>) -> Self {
        Self {
            package,
            dependencies,
        }
    }
}

/// DependencyGraph aggregate representing the complete dependency structure
///
/// An edge from A to B means "A depends on B". The adjacency map holds every
/// known package as a key, so a leaf package (one that appears only as a
/// dependency target) still resolves to an empty dependency list. A separate
/// insertion-ordered node list keeps every analysis deterministic for a
/// fixed input: all analyzers iterate nodes and neighbors in first-seen
/// order. The graph is immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: HashMap<PackageName, Vec<PackageName>>,
    nodes: Vec<PackageName>,
    edge_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from parsed dependency records, validating every name.
    ///
    /// Duplicate keys across records accumulate dependencies rather than
    /// overwrite; repeated edges for the same dependent are deduplicated so
    /// that derived results (in-degree in particular) count distinct edges.
    ///
    /// # Errors
    /// Returns an error if any package name fails validation.
    pub fn from_records(records: &[DependencyRecord]) -> Result<Self> {
        let mut graph = Self::new();

        for record in records {
            let package = PackageName::new(record.package.clone())?;
            graph.register(&package);

            for dependency in &record.dependencies {
                let dependency = PackageName::new(dependency.clone())?;
                graph.add_edge(&package, &dependency);
            }
        }

        Ok(graph)
    }

    /// Direct dependencies of `package`, in first-insertion order.
    /// Empty for leaf packages and for names the graph has never seen.
    pub fn neighbors(&self, package: &PackageName) -> &[PackageName] {
        self.adjacency
            .get(package)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every known package (keys and dependency targets), in first-seen order.
    pub fn nodes(&self) -> &[PackageName] {
        &self.nodes
    }

    pub fn contains(&self, package: &PackageName) -> bool {
        self.adjacency.contains_key(package)
    }

    pub fn package_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds the inverted graph: for every edge (A→B) the result holds
    /// (B→A), mapping each package to the packages that directly depend on
    /// it. Every node of the source appears in the inversion, dependent-less
    /// packages with an empty list.
    pub fn invert(&self) -> DependencyGraph {
        let mut inverted = Self::new();

        for node in &self.nodes {
            inverted.register(node);
        }
        for node in &self.nodes {
            for dependency in self.neighbors(node) {
                inverted.add_edge(dependency, node);
            }
        }

        inverted
    }

    fn register(&mut self, package: &PackageName) {
        if !self.adjacency.contains_key(package) {
            self.adjacency.insert(package.clone(), Vec::new());
            self.nodes.push(package.clone());
        }
    }

    fn add_edge(&mut self, dependent: &PackageName, dependency: &PackageName) {
        self.register(dependent);
        self.register(dependency);

        let targets = self
            .adjacency
            .get_mut(dependent)
            .expect("dependent registered above");
        if !targets.contains(dependency) {
            targets.push(dependency.clone());
            self.edge_count += 1;
        }
    }
}
