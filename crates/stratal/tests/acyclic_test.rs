use stratal::acyclic;
use stratal::model::{EdgeLabel, Element, LayoutGraph, NodeLabel};
use stratal::net::Net;
use stratal_graphlib::{alg, NodeId};

fn graph_of(n: usize) -> (LayoutGraph, Vec<NodeId>) {
    let mut net = Net::new();
    let mut g = LayoutGraph::new();
    let nodes = (0..n)
        .map(|i| g.add_node(NodeLabel::new(Element::Place(net.add_place(format!("p{i}"))))))
        .collect();
    (g, nodes)
}

fn connect(g: &mut LayoutGraph, nodes: &[NodeId], pairs: &[(usize, usize)]) {
    for &(a, b) in pairs {
        g.add_edge(nodes[a], nodes[b], EdgeLabel::default());
    }
}

fn reversed_count(g: &LayoutGraph) -> usize {
    g.edges().filter(|(_, e)| e.label.reversed).count()
}

#[test]
fn acyclic_leaves_a_dag_untouched() {
    let (mut g, n) = graph_of(4);
    connect(&mut g, &n, &[(0, 1), (0, 2), (1, 3), (2, 3)]);

    let out = acyclic::run(&g);

    assert_eq!(reversed_count(&out), 0);
    assert!(alg::is_acyclic(&out));
    for (id, edge) in g.edges() {
        assert_eq!(out.edge(id).from, edge.from);
        assert_eq!(out.edge(id).to, edge.to);
    }
}

#[test]
fn acyclic_reverses_exactly_one_edge_of_a_simple_cycle() {
    let (mut g, n) = graph_of(3);
    connect(&mut g, &n, &[(0, 1), (1, 2), (2, 0)]);

    let out = acyclic::run(&g);

    assert!(alg::is_acyclic(&out));
    assert_eq!(reversed_count(&out), 1);
    assert_eq!(out.edge_count(), 3);
}

#[test]
fn acyclic_does_not_modify_the_input_graph() {
    let (mut g, n) = graph_of(2);
    connect(&mut g, &n, &[(0, 1), (1, 0)]);

    let _ = acyclic::run(&g);

    assert!(!alg::is_acyclic(&g));
    assert_eq!(reversed_count(&g), 0);
}

#[test]
fn acyclic_keeps_edge_endpoints_as_a_pair() {
    let (mut g, n) = graph_of(3);
    connect(&mut g, &n, &[(0, 1), (1, 2), (2, 0)]);

    let out = acyclic::run(&g);

    for (id, edge) in g.edges() {
        let flipped = out.edge(id);
        let same = flipped.from == edge.from && flipped.to == edge.to;
        let swapped = flipped.from == edge.to && flipped.to == edge.from;
        assert!(same || swapped);
        assert_eq!(flipped.label.reversed, swapped);
    }
}

#[test]
fn acyclic_ignores_self_loops() {
    let (mut g, n) = graph_of(2);
    connect(&mut g, &n, &[(0, 0), (0, 1)]);

    let out = acyclic::run(&g);

    assert_eq!(reversed_count(&out), 0);
    assert!(out.edge(out.edge_ids().next().unwrap()).is_self_loop());
}

#[test]
fn acyclic_handles_two_disjoint_cycles() {
    let (mut g, n) = graph_of(6);
    connect(&mut g, &n, &[(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (4, 5)]);

    let out = acyclic::run(&g);

    assert!(alg::is_acyclic(&out));
    assert_eq!(reversed_count(&out), 2);
}
