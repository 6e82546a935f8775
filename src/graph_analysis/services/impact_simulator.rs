use super::traversal::{depth_first, Control, DfsState, DfsVisitor};
use crate::graph_analysis::domain::{DependencyGraph, PackageName};

struct ReachabilityCollector {
    reached: Vec<PackageName>,
}

impl DfsVisitor for ReachabilityCollector {
    fn discover(&mut self, node: &PackageName) -> Control {
        self.reached.push(node.clone());
        Control::Continue
    }
}

/// Everything reachable from `start` by following edges forward, excluding
/// `start` itself, in deterministic discovery order. A name the graph has
/// never seen reaches nothing.
fn reachable_from(graph: &DependencyGraph, start: &PackageName) -> Vec<PackageName> {
    let mut state = DfsState::new();
    let mut collector = ReachabilityCollector {
        reached: Vec::new(),
    };
    depth_first(graph, start, &mut state, &mut collector);
    collector.reached.retain(|node| node != start);
    collector.reached
}

/// DependencyQuery service resolving the full transitive dependency set of
/// one package
pub struct DependencyQuery;

impl DependencyQuery {
    /// All packages the given package depends on, directly or indirectly,
    /// excluding the package itself. Unknown packages yield an empty result,
    /// not an error.
    pub fn dependencies_of(graph: &DependencyGraph, package: &PackageName) -> Vec<PackageName> {
        reachable_from(graph, package)
    }
}

/// ImpactSimulator service estimating the blast radius of removing a package
///
/// The simulation is conservative: every package with any dependency chain
/// through the removed one is reported as affected, even if an alternative
/// chain could satisfy it.
pub struct ImpactSimulator;

impl ImpactSimulator {
    /// All packages that directly or transitively depend on the given
    /// package, computed as forward reachability over the inverted graph.
    pub fn simulate_removal(graph: &DependencyGraph, package: &PackageName) -> Vec<PackageName> {
        let inverted = graph.invert();
        DependencyQuery::dependencies_of(&inverted, package)
    }
}
