//! Spanning-tree bookkeeping for the ranker.
//!
//! The tree lives over the layout graph's node arena: membership, the
//! post-order interval bounds (`low`/`lim`) and the owning tree edge
//! (`parent`) are stored per node, cut values per undirected tree edge.
//! `low`/`lim` let `network_simplex` decide in O(1) which side of a broken
//! tree edge a node falls on.

use stratal_graphlib::NodeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNodeLabel {
    pub low: i32,
    pub lim: i32,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub v: NodeId,
    pub w: NodeId,
    pub cutvalue: f64,
}

impl TreeEdge {
    fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.v == a && self.w == b) || (self.v == b && self.w == a)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Option<TreeNodeLabel>>,
    edges: Vec<TreeEdge>,
}

impl Tree {
    /// An empty tree over an arena of `arena_len` nodes.
    pub fn with_arena(arena_len: usize) -> Self {
        Self {
            nodes: vec![None; arena_len],
            edges: Vec::new(),
        }
    }

    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_node(&mut self, v: NodeId) {
        let slot = &mut self.nodes[v.index()];
        if slot.is_none() {
            *slot = Some(TreeNodeLabel::default());
        }
    }

    pub fn has_node(&self, v: NodeId) -> bool {
        self.nodes.get(v.index()).is_some_and(|n| n.is_some())
    }

    pub fn node(&self, v: NodeId) -> &TreeNodeLabel {
        self.nodes[v.index()].as_ref().expect("node not in tree")
    }

    pub fn node_mut(&mut self, v: NodeId) -> &mut TreeNodeLabel {
        self.nodes[v.index()].as_mut().expect("node not in tree")
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Member nodes in arena order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId::from_index(i))
            .collect()
    }

    pub fn add_edge(&mut self, v: NodeId, w: NodeId) {
        self.edges.push(TreeEdge {
            v,
            w,
            cutvalue: 0.0,
        });
    }

    pub fn remove_edge(&mut self, v: NodeId, w: NodeId) {
        self.edges.retain(|e| !e.connects(v, w));
    }

    pub fn has_edge(&self, v: NodeId, w: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(v, w))
    }

    pub fn edge(&self, v: NodeId, w: NodeId) -> &TreeEdge {
        self.edges
            .iter()
            .find(|e| e.connects(v, w))
            .expect("tree edge missing")
    }

    pub fn edge_mut(&mut self, v: NodeId, w: NodeId) -> &mut TreeEdge {
        self.edges
            .iter_mut()
            .find(|e| e.connects(v, w))
            .expect("tree edge missing")
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn neighbors(&self, v: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.v == v {
                    Some(e.w)
                } else if e.w == v {
                    Some(e.v)
                } else {
                    None
                }
            })
            .collect()
    }
}
