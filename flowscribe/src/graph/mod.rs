//! Control-flow graph model and construction.
//!
//! One graph per function, never across function boundaries. The builder is
//! an explicit value owning the node arena, edge list, and id counter,
//! threaded by mutable reference through the recursion — no captured mutable
//! state. Preprocessor-guarded statement runs are collected independently as
//! linear lanes and never influence the primary graph.

mod builder;
mod lanes;
mod types;

pub use builder::build_flow_graph;
pub use lanes::{extract_switch_lanes, ConditionalBranchGroup};
pub use types::{Branch, Edge, FlowGraph, Node, NodeKind};
