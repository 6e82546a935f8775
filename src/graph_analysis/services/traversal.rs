use crate::graph_analysis::domain::{DependencyGraph, PackageName};
use std::collections::HashSet;

/// Flow control for traversal callbacks: `Stop` aborts the traversal
/// immediately, letting analyses short-circuit (e.g. cycle detection on the
/// first back edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Shared bookkeeping for a depth-first traversal.
///
/// `visited` holds nodes that have been discovered in any pass; `on_path`
/// holds the nodes of the active traversal path. The state is owned by the
/// caller and threaded through every root, so a forest traversal never
/// re-enters a finished subtree.
#[derive(Debug, Default)]
pub struct DfsState {
    visited: HashSet<PackageName>,
    on_path: HashSet<PackageName>,
}

impl DfsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, package: &PackageName) -> bool {
        self.visited.contains(package)
    }
}

/// Visitor hooks for the depth-first driver.
///
/// Every analysis plugs in here instead of re-deriving traversal order:
/// - `discover` fires when a node is first reached (pre-order)
/// - `back_edge` fires on an edge to a node on the active path (a cycle;
///   self-loops included)
/// - `cross_edge` fires on an edge to an already-finished node
/// - `finish` fires after all of a node's dependencies finished (post-order)
/// - `finish_edge` fires on the tree edge back to the parent after `finish`
pub trait DfsVisitor {
    fn discover(&mut self, _node: &PackageName) -> Control {
        Control::Continue
    }

    fn back_edge(&mut self, _from: &PackageName, _to: &PackageName) -> Control {
        Control::Continue
    }

    fn cross_edge(&mut self, _from: &PackageName, _to: &PackageName) -> Control {
        Control::Continue
    }

    fn finish(&mut self, _node: &PackageName) {}

    fn finish_edge(&mut self, _from: &PackageName, _to: &PackageName) {}
}

struct Frame {
    node: PackageName,
    next: usize,
}

/// Depth-first traversal from a single start node.
///
/// Iterative with an explicit frame stack, so traversal depth is bounded by
/// available heap rather than the call stack. Neighbors are explored in
/// their stored insertion order, which keeps every derived result
/// deterministic for a fixed input. A start node that is already visited is
/// skipped without invoking the visitor.
pub fn depth_first(
    graph: &DependencyGraph,
    start: &PackageName,
    state: &mut DfsState,
    visitor: &mut dyn DfsVisitor,
) -> Control {
    if state.visited.contains(start) {
        return Control::Continue;
    }

    state.visited.insert(start.clone());
    state.on_path.insert(start.clone());
    if visitor.discover(start) == Control::Stop {
        return Control::Stop;
    }

    let mut stack = vec![Frame {
        node: start.clone(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node.clone();
        let next = frame.next;
        frame.next += 1;

        if let Some(neighbor) = graph.neighbors(&node).get(next) {
            if !state.visited.contains(neighbor) {
                state.visited.insert(neighbor.clone());
                state.on_path.insert(neighbor.clone());
                if visitor.discover(neighbor) == Control::Stop {
                    return Control::Stop;
                }
                stack.push(Frame {
                    node: neighbor.clone(),
                    next: 0,
                });
            } else if state.on_path.contains(neighbor) {
                if visitor.back_edge(&node, neighbor) == Control::Stop {
                    return Control::Stop;
                }
            } else if visitor.cross_edge(&node, neighbor) == Control::Stop {
                return Control::Stop;
            }
        } else {
            state.on_path.remove(&node);
            stack.pop();
            visitor.finish(&node);
            if let Some(parent) = stack.last() {
                visitor.finish_edge(&parent.node, &node);
            }
        }
    }

    Control::Continue
}

/// Depth-first traversal over the whole graph: every node in insertion
/// order serves as a root for the part of the forest it can reach.
pub fn depth_first_forest(graph: &DependencyGraph, visitor: &mut dyn DfsVisitor) -> Control {
    let mut state = DfsState::new();
    for node in graph.nodes() {
        if depth_first(graph, node, &mut state, visitor) == Control::Stop {
            return Control::Stop;
        }
    }
    Control::Continue
}
