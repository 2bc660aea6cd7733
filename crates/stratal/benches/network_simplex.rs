use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

use stratal::model::{EdgeLabel, Element, LayoutGraph, NodeLabel};
use stratal::net::Net;
use stratal::rank;
use stratal_graphlib::NodeId;

/// A layered pseudo-random DAG: `layers` ranks of `width` nodes, each node
/// wired to a couple of nodes in the next rank plus the occasional skip
/// edge, so the simplex has slack to optimize away.
fn layered_graph(layers: usize, width: usize) -> LayoutGraph {
    let mut net = Net::new();
    let mut g = LayoutGraph::new();
    let mut grid: Vec<Vec<NodeId>> = Vec::with_capacity(layers);
    for l in 0..layers {
        let row = (0..width)
            .map(|i| {
                let p = net.add_place(format!("p{l}_{i}"));
                g.add_node(NodeLabel::new(Element::Place(p)))
            })
            .collect();
        grid.push(row);
    }

    let mut seed = 0x9e3779b9u32;
    let mut next = |m: usize| {
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (seed >> 16) as usize % m
    };

    for l in 0..layers - 1 {
        for i in 0..width {
            let from = grid[l][i];
            g.add_edge(from, grid[l + 1][next(width)], EdgeLabel::default());
            g.add_edge(from, grid[l + 1][next(width)], EdgeLabel::default());
            if l + 2 < layers && next(4) == 0 {
                g.add_edge(from, grid[l + 2][next(width)], EdgeLabel::default());
            }
        }
    }
    g
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    group.measurement_time(Duration::from_secs(5));

    for &(layers, width) in &[(8usize, 4usize), (16, 8), (32, 16)] {
        let g = layered_graph(layers, width);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", layers, width)),
            &g,
            |b, g| {
                b.iter_batched(
                    || g.clone(),
                    |mut g| {
                        rank::rank(&mut g);
                        black_box(g)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
