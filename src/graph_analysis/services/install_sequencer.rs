use super::traversal::{depth_first_forest, Control, DfsVisitor};
use crate::graph_analysis::domain::{DependencyGraph, PackageName};
use crate::shared::error::DepGraphError;
use crate::shared::Result;

/// InstallSequencer service producing a valid install order
///
/// Depth-first post-order over the whole graph: a package is appended to the
/// order only after all of its dependencies finished, so dependencies always
/// precede their dependents. A cyclic graph has no valid total order and is
/// reported as a distinct failure, never as a partial order.
pub struct InstallSequencer;

struct FinishCollector {
    order: Vec<PackageName>,
    cycle: bool,
}

impl DfsVisitor for FinishCollector {
    fn back_edge(&mut self, _from: &PackageName, _to: &PackageName) -> Control {
        self.cycle = true;
        Control::Stop
    }

    fn finish(&mut self, node: &PackageName) {
        self.order.push(node.clone());
    }
}

impl InstallSequencer {
    /// Computes an install order containing every package exactly once,
    /// with every dependency placed before its dependents.
    ///
    /// # Errors
    /// Returns `DepGraphError::CyclicDependency` if the graph contains a
    /// cycle.
    pub fn install_order(graph: &DependencyGraph) -> Result<Vec<PackageName>> {
        let mut collector = FinishCollector {
            order: Vec::new(),
            cycle: false,
        };
        depth_first_forest(graph, &mut collector);

        if collector.cycle {
            return Err(DepGraphError::CyclicDependency.into());
        }

        Ok(collector.order)
    }
}
