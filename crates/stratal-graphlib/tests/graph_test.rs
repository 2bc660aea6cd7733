use stratal_graphlib::{Graph, NodeId};

fn diamond() -> (Graph<&'static str, ()>, [NodeId; 4]) {
    let mut g: Graph<&str, ()> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    let d = g.add_node("d");
    g.add_edge(a, b, ());
    g.add_edge(a, c, ());
    g.add_edge(b, d, ());
    g.add_edge(c, d, ());
    (g, [a, b, c, d])
}

#[test]
fn add_node_returns_distinct_handles() {
    let mut g: Graph<&str, ()> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    assert_ne!(a, b);
    assert_eq!(g.node_count(), 2);
    assert_eq!(*g.node(a), "a");
    assert_eq!(*g.node(b), "b");
}

#[test]
fn add_edge_twice_creates_two_edges() {
    let mut g: Graph<(), ()> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let e1 = g.add_edge(a, b, ());
    let e2 = g.add_edge(a, b, ());
    assert_ne!(e1, e2);
    assert_eq!(g.edge_count(), 2);
}

#[test]
#[should_panic(expected = "edge endpoints must be members")]
fn add_edge_rejects_foreign_endpoints() {
    let mut small: Graph<(), ()> = Graph::new();
    let a = small.add_node(());

    let mut big: Graph<(), ()> = Graph::new();
    let _ = big.add_node(());
    let _ = big.add_node(());
    let b = big.add_node(());

    // `b` was issued by a larger arena; `small` has no third node.
    small.add_edge(a, b, ());
}

#[test]
fn out_and_in_edges_follow_direction() {
    let (g, [a, b, c, d]) = diamond();
    assert_eq!(g.out_edges(a).len(), 2);
    assert_eq!(g.in_edges(a).len(), 0);
    assert_eq!(g.in_edges(d).len(), 2);
    assert_eq!(g.successors(a), vec![b, c]);
    assert_eq!(g.predecessors(d), vec![b, c]);
}

#[test]
fn sources_ignore_self_loops() {
    let mut g: Graph<(), ()> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, ());
    g.add_edge(b, b, ());
    assert_eq!(g.sources(), vec![a]);
}

#[test]
fn transpose_leaves_the_original_untouched() {
    let (g, [a, b, c, _]) = diamond();
    let gt = g.transpose();
    assert_eq!(gt.successors(b), vec![a]);
    assert_eq!(gt.predecessors(a), vec![b, c]);
    assert!(gt.out_edges(a).is_empty());
    // Original still points a -> b.
    assert_eq!(g.successors(a)[0], b);
}

#[test]
fn transpose_twice_restores_the_edge_set() {
    let (g, _) = diamond();
    let gtt = g.transpose().transpose();
    let pairs = |g: &Graph<&str, ()>| {
        g.edges()
            .map(|(_, e)| (e.from, e.to))
            .collect::<Vec<_>>()
    };
    assert_eq!(pairs(&g), pairs(&gtt));
}

#[test]
fn reverse_edge_flips_direction_in_place() {
    let mut g: Graph<(), u32> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let e = g.add_edge(a, b, 7);
    g.reverse_edge(e);
    assert_eq!(g.edge(e).from, b);
    assert_eq!(g.edge(e).to, a);
    assert_eq!(g.edge(e).label, 7);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn remove_edge_swap_removes() {
    let mut g: Graph<(), u32> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let e1 = g.add_edge(a, b, 1);
    let _e2 = g.add_edge(b, a, 2);
    let removed = g.remove_edge(e1);
    assert_eq!(removed.label, 1);
    assert_eq!(g.edge_count(), 1);
    // The former last edge now occupies the removed slot.
    assert_eq!(g.edge(e1).label, 2);
}

#[test]
fn node_edges_lists_a_self_loop_once() {
    let mut g: Graph<(), ()> = Graph::new();
    let a = g.add_node(());
    g.add_edge(a, a, ());
    assert_eq!(g.node_edges(a).len(), 1);
}
