//! Integration tests for pf-graph.

use pf_graph::{GraphBuilder, is_acyclic};

#[test]
fn build_minimal_graph() {
    // Build: a -> b
    let mut builder = GraphBuilder::new();
    builder.add_node("a");
    builder.add_node("b");
    builder.add_edge("a", "b");

    let graph = builder.build();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node_ids(), ["a", "b"]);
    assert_eq!(graph.successors("a"), ["b"]);
    assert!(graph.successors("b").is_empty());
    assert!(is_acyclic(&graph));
}

#[test]
fn directed_chain_is_acyclic() {
    // Build: n0 -> n1 -> ... -> n25
    let mut builder = GraphBuilder::new();
    for i in 0..26 {
        builder.add_node(format!("n{}", i));
    }
    for i in 0..25 {
        builder.add_edge(format!("n{}", i), format!("n{}", i + 1));
    }

    let graph = builder.build();
    assert_eq!(graph.node_count(), 26);
    assert!(is_acyclic(&graph));
}

#[test]
fn closing_the_chain_makes_a_cycle() {
    let mut builder = GraphBuilder::new();
    for i in 0..26 {
        builder.add_node(format!("n{}", i));
    }
    for i in 0..25 {
        builder.add_edge(format!("n{}", i), format!("n{}", i + 1));
    }
    builder.add_edge("n25", "n0");

    assert!(!is_acyclic(&builder.build()));
}

#[test]
fn deep_chain_does_not_overflow_the_stack() {
    // A recursion-based traversal would blow the call stack well before
    // this depth; the explicit-stack traversal must not.
    let depth = 200_000;
    let mut builder = GraphBuilder::new();
    for i in 0..depth {
        builder.add_node(i.to_string());
    }
    for i in 0..depth - 1 {
        builder.add_edge(i.to_string(), (i + 1).to_string());
    }

    let graph = builder.build();
    assert!(is_acyclic(&graph));
}

#[test]
fn deep_chain_with_back_edge_is_cyclic() {
    let depth = 200_000;
    let mut builder = GraphBuilder::new();
    for i in 0..depth {
        builder.add_node(i.to_string());
    }
    for i in 0..depth - 1 {
        builder.add_edge(i.to_string(), (i + 1).to_string());
    }
    builder.add_edge((depth - 1).to_string(), "0");

    assert!(!is_acyclic(&builder.build()));
}

#[test]
fn parallel_edges_between_same_nodes() {
    // Duplicate a -> b edges are harmless; only a reverse edge cycles.
    let mut builder = GraphBuilder::new();
    builder.add_node("a");
    builder.add_node("b");
    builder.add_edge("a", "b");
    builder.add_edge("a", "b");

    let graph = builder.build();
    assert_eq!(graph.successors("a"), ["b", "b"]);
    assert!(is_acyclic(&graph));
}

#[test]
fn unknown_source_edges_do_not_affect_verdict() {
    let mut builder = GraphBuilder::new();
    builder.add_node("a");
    builder.add_node("b");
    builder.add_edge("a", "b");
    builder.add_edge("ghost", "a");
    builder.add_edge("ghost", "ghost");

    let graph = builder.build();
    assert_eq!(graph.successors("a"), ["b"]);
    assert!(is_acyclic(&graph));
}
