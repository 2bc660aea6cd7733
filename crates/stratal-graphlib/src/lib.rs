//! Graph container APIs used by `stratal`.
//!
//! The container is an arena: nodes and edges live in contiguous storage and
//! are addressed by integer handles (`NodeId` / `EdgeId`). Handle equality is
//! the identity notion everywhere in the layout pipeline, and handles remain
//! valid across derived snapshots such as `Graph::transpose`.

pub mod graph;

pub use graph::alg;
pub use graph::traverse;
pub use graph::{Edge, EdgeId, Graph, NodeId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
