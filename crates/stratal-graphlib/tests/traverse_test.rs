use stratal_graphlib::traverse::dfs;
use stratal_graphlib::{Graph, NodeId};

fn chain(n: usize) -> (Graph<(), ()>, Vec<NodeId>) {
    let mut g: Graph<(), ()> = Graph::new();
    let ids: Vec<NodeId> = (0..n).map(|_| g.add_node(())).collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1], ());
    }
    (g, ids)
}

#[test]
fn open_close_counters_nest_along_a_chain() {
    let (g, ids) = chain(3);
    let times = dfs(&g, ids[0], |_| true, |_| {}, |_| {});

    // a opens first and closes last; each child interval nests inside its
    // parent's interval.
    assert_eq!(times.open[ids[0].index()], 1);
    assert_eq!(times.close[ids[0].index()], 6);
    assert!(times.open[ids[0].index()] < times.open[ids[1].index()]);
    assert!(times.close[ids[1].index()] < times.close[ids[0].index()]);
    assert!(times.open[ids[1].index()] < times.open[ids[2].index()]);
    assert!(times.close[ids[2].index()] < times.close[ids[1].index()]);
}

#[test]
fn open_and_close_fire_in_preorder_and_postorder() {
    let (g, ids) = chain(3);
    let mut opened: Vec<NodeId> = Vec::new();
    let mut closed: Vec<NodeId> = Vec::new();
    dfs(&g, ids[0], |_| true, |v| opened.push(v), |v| closed.push(v));
    assert_eq!(opened, ids);
    assert_eq!(closed, ids.iter().rev().copied().collect::<Vec<_>>());
}

#[test]
fn cond_prunes_entire_subtrees() {
    let (g, ids) = chain(3);
    let blocked = ids[1];
    let mut opened: Vec<NodeId> = Vec::new();
    let times = dfs(&g, ids[0], |v| v != blocked, |v| opened.push(v), |_| {});
    assert_eq!(opened, vec![ids[0]]);
    assert!(!times.visited(ids[1]));
    assert!(!times.visited(ids[2]));
}

#[test]
fn cycles_and_self_loops_terminate() {
    let mut g: Graph<(), ()> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, ());
    g.add_edge(b, a, ());
    g.add_edge(a, a, ());

    let mut opens = 0usize;
    let times = dfs(&g, a, |_| true, |_| opens += 1, |_| {});
    assert_eq!(opens, 2);
    assert!(times.visited(a));
    assert!(times.visited(b));
}

#[test]
fn repeated_invocations_share_memory_through_cond() {
    // Two components; a whole-graph sweep visits each node exactly once when
    // the caller threads a visited set through `cond`.
    let mut g: Graph<(), ()> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let c = g.add_node(());
    g.add_edge(a, b, ());

    let visited: Vec<std::cell::Cell<bool>> =
        vec![std::cell::Cell::new(false); g.node_count()];
    let mut opened: Vec<NodeId> = Vec::new();
    for v in g.node_ids() {
        dfs(
            &g,
            v,
            |w| !visited[w.index()].get(),
            |w| {
                visited[w.index()].set(true);
                opened.push(w);
            },
            |_| {},
        );
    }
    assert_eq!(opened, vec![a, b, c]);
}

#[test]
fn traversal_follows_out_edges_of_the_graph_passed_in() {
    let (g, ids) = chain(3);
    let gt = g.transpose();
    let mut opened: Vec<NodeId> = Vec::new();
    dfs(&gt, ids[2], |_| true, |v| opened.push(v), |_| {});
    assert_eq!(opened, vec![ids[2], ids[1], ids[0]]);
}
