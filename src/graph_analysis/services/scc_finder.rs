use super::traversal::{depth_first_forest, Control, DfsVisitor};
use crate::graph_analysis::domain::{DependencyGraph, PackageName};
use std::collections::{HashMap, HashSet};

/// SccFinder service partitioning the graph into strongly connected
/// components with Tarjan's algorithm
///
/// Every package lands in exactly one component, singletons included; a
/// component with more than one member (or a self-loop) marks a dependency
/// cycle. Components are returned in completion order, which is stable for
/// a fixed input.
pub struct SccFinder;

struct TarjanVisitor {
    next_index: usize,
    index: HashMap<PackageName, usize>,
    low_link: HashMap<PackageName, usize>,
    component_stack: Vec<PackageName>,
    on_stack: HashSet<PackageName>,
    components: Vec<Vec<PackageName>>,
}

impl TarjanVisitor {
    fn new() -> Self {
        Self {
            next_index: 0,
            index: HashMap::new(),
            low_link: HashMap::new(),
            component_stack: Vec::new(),
            on_stack: HashSet::new(),
            components: Vec::new(),
        }
    }

    /// An edge into a node still on the component stack lowers the source's
    /// low-link to the target's discovery index. Edges to nodes of already
    /// completed components are ignored.
    fn absorb_stack_edge(&mut self, from: &PackageName, to: &PackageName) {
        if self.on_stack.contains(to) {
            let target_index = self.index[to];
            let low = self.low_link.get_mut(from).expect("from was discovered");
            if target_index < *low {
                *low = target_index;
            }
        }
    }
}

impl DfsVisitor for TarjanVisitor {
    fn discover(&mut self, node: &PackageName) -> Control {
        self.index.insert(node.clone(), self.next_index);
        self.low_link.insert(node.clone(), self.next_index);
        self.next_index += 1;
        self.component_stack.push(node.clone());
        self.on_stack.insert(node.clone());
        Control::Continue
    }

    fn back_edge(&mut self, from: &PackageName, to: &PackageName) -> Control {
        self.absorb_stack_edge(from, to);
        Control::Continue
    }

    fn cross_edge(&mut self, from: &PackageName, to: &PackageName) -> Control {
        self.absorb_stack_edge(from, to);
        Control::Continue
    }

    fn finish(&mut self, node: &PackageName) {
        // A node whose low-link still equals its own index roots a component:
        // everything above it on the stack belongs to the same SCC.
        if self.low_link[node] == self.index[node] {
            let mut component = Vec::new();
            loop {
                let member = self
                    .component_stack
                    .pop()
                    .expect("component root is on the stack");
                self.on_stack.remove(&member);
                let is_root = member == *node;
                component.push(member);
                if is_root {
                    break;
                }
            }
            self.components.push(component);
        }
    }

    fn finish_edge(&mut self, from: &PackageName, to: &PackageName) {
        let child_low = self.low_link[to];
        let low = self.low_link.get_mut(from).expect("from was discovered");
        if child_low < *low {
            *low = child_low;
        }
    }
}

impl SccFinder {
    /// Partitions all packages into strongly connected components.
    pub fn find_sccs(graph: &DependencyGraph) -> Vec<Vec<PackageName>> {
        let mut visitor = TarjanVisitor::new();
        depth_first_forest(graph, &mut visitor);
        visitor.components
    }
}
