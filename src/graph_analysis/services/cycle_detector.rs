use super::traversal::{depth_first_forest, Control, DfsVisitor};
use crate::graph_analysis::domain::{DependencyGraph, PackageName};

/// CycleDetector service answering whether any dependency cycle exists
///
/// This service contains pure business logic with no I/O dependencies.
pub struct CycleDetector;

struct BackEdgeProbe {
    found: bool,
}

impl DfsVisitor for BackEdgeProbe {
    fn back_edge(&mut self, _from: &PackageName, _to: &PackageName) -> Control {
        self.found = true;
        Control::Stop
    }
}

impl CycleDetector {
    /// Returns true if the graph contains at least one dependency cycle
    /// (self-loops included). Short-circuits on the first back edge found.
    pub fn has_cycle(graph: &DependencyGraph) -> bool {
        let mut probe = BackEdgeProbe { found: false };
        depth_first_forest(graph, &mut probe);
        probe.found
    }
}
