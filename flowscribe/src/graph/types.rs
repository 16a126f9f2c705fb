use std::fmt;

/// Kind of a control-flow node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic start node.
    Entry,
    /// Synthetic end node.
    Exit,
    /// One normalized statement.
    Action,
    /// Conditional test; carries the condition text as its label.
    Decision,
    /// Synthetic join point where a decision's branches reconverge.
    Merge,
}

/// A node in the flow graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Identifier, unique within the graph.
    pub id: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Display label. Empty for merge nodes.
    pub label: String,
}

/// Branch outcome label on edges leaving a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Condition held.
    Yes,
    /// Condition did not hold.
    No,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Set only on edges leaving a decision node.
    pub branch: Option<Branch>,
}

/// Control-flow graph for a single function.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    /// Nodes in insertion order.
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
    /// Id of the entry node.
    pub entry_id: String,
    /// Id of the exit node.
    pub exit_id: String,
}

impl FlowGraph {
    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Counts nodes of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|node| node.kind == kind).count()
    }

    /// Identifies all nodes that are not reachable from the entry node.
    ///
    /// A well-formed graph returns an empty list: every decision outcome
    /// terminates at a synthesized merge node, so no branch dangles.
    #[must_use]
    pub fn find_unreachable_nodes(&self) -> Vec<&str> {
        let mut reachable: Vec<&str> = Vec::new();
        let mut stack = vec![self.entry_id.as_str()];

        while let Some(id) = stack.pop() {
            if reachable.contains(&id) {
                continue;
            }
            reachable.push(id);
            for edge in &self.edges {
                if edge.from == id {
                    stack.push(edge.to.as_str());
                }
            }
        }

        self.nodes
            .iter()
            .filter(|node| !reachable.contains(&node.id.as_str()))
            .map(|node| node.id.as_str())
            .collect()
    }
}
