//! Cycle detection over a pipeline graph.

use std::collections::HashMap;

use crate::model::PipelineGraph;

/// Traversal state of a single node during one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet reached.
    Unvisited,
    /// On the active traversal path; reaching it again closes a cycle.
    InProgress,
    /// Fully explored; no cycle passes through this node.
    Done,
}

/// Decide whether `graph` is free of directed cycles.
///
/// Classic three-color depth-first search, run with an explicit stack so
/// deeply chained graphs cannot exhaust the call stack. Starting nodes are
/// taken in submission order, successors in edge order, and the first
/// back-edge short-circuits the whole traversal.
pub fn is_acyclic(graph: &PipelineGraph) -> bool {
    let mut colors: HashMap<&str, Color> = graph
        .node_ids()
        .iter()
        .map(|id| (id.as_str(), Color::Unvisited))
        .collect();

    for start in graph.node_ids() {
        if colors[start.as_str()] == Color::Unvisited && has_cycle_from(graph, start, &mut colors) {
            return false;
        }
    }
    true
}

/// Depth-first visit from `start`, reporting whether a back-edge exists.
///
/// Each stack frame is (node, index of the next successor to scan), which
/// simulates the recursive call with bounded, explicit memory.
fn has_cycle_from<'g>(
    graph: &'g PipelineGraph,
    start: &'g str,
    colors: &mut HashMap<&'g str, Color>,
) -> bool {
    colors.insert(start, Color::InProgress);
    let mut stack: Vec<(&str, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let successors = graph.successors(node);

        if cursor < successors.len() {
            frame.1 += 1;
            let next = successors[cursor].as_str();
            match colors.get(next).copied() {
                Some(Color::InProgress) => return true,
                Some(Color::Unvisited) => {
                    colors.insert(next, Color::InProgress);
                    stack.push((next, 0));
                }
                // Done: already fully explored. None: the edge points at an
                // id that was never submitted as a node, so there is nothing
                // to descend into.
                Some(Color::Done) | None => {}
            }
        } else {
            colors.insert(node, Color::Done);
            stack.pop();
        }
    }
    false
}
