use crate::constants::{get_else_re, get_if_condition_re, get_if_head_re};
use crate::locator::SourceFunction;
use crate::rules::{strip_comments, Classifier};

use super::types::{Branch, Edge, FlowGraph, Node, NodeKind};

const ENTRY_ID: &str = "start";
const EXIT_ID: &str = "end_node";

/// Placeholder condition text when no `(...)` follows an `if`.
const CONDITION_PLACEHOLDER: &str = "condition";

/// Builds the control-flow graph for one located function.
///
/// Best-effort: malformed conditions degrade to a placeholder label and an
/// unclosed block simply ends the walk at end-of-input. The diagram is never
/// aborted over one bad line.
#[must_use]
pub fn build_flow_graph(func: &SourceFunction, classifier: &Classifier) -> FlowGraph {
    GraphBuilder::new(classifier).build(&func.raw_text)
}

/// How the next emitted node attaches to the graph.
///
/// A branch link carries the enclosing decision until the first node of that
/// branch is emitted; from then on nodes chain sequentially.
enum Link {
    Seq(String),
    Branch { decision: String, branch: Branch },
}

/// Explicit builder owning the node arena, edge list, and id counter.
///
/// Passed by mutable reference through the recursion; never shared.
struct GraphBuilder<'a> {
    classifier: &'a Classifier,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: usize,
}

impl<'a> GraphBuilder<'a> {
    fn new(classifier: &'a Classifier) -> Self {
        let entry = Node {
            id: ENTRY_ID.to_owned(),
            kind: NodeKind::Entry,
            label: "Start".to_owned(),
        };
        Self {
            classifier,
            nodes: vec![entry],
            edges: Vec::new(),
            next_id: 0,
        }
    }

    fn build(mut self, raw_text: &str) -> FlowGraph {
        let lines = split_logical_lines(raw_text);

        // Skip the signature, up to and including the body's opening brace.
        let mut i = lines
            .iter()
            .position(|line| line == "{")
            .map_or(lines.len(), |pos| pos + 1);

        let mut link = Link::Seq(ENTRY_ID.to_owned());
        while i < lines.len() {
            let line = &lines[i];
            if line.is_empty() || line == "{" || line == "}" || line.starts_with('#') {
                i += 1;
                continue;
            }
            if get_if_head_re().is_match(line) {
                let (next_link, next_i) = self.parse_if(&lines, i, link);
                link = next_link;
                i = next_i;
                continue;
            }
            if let Some(label) = self.classifier.classify(line) {
                let id = self.add_node(NodeKind::Action, label);
                link = self.connect(link, id);
            }
            i += 1;
        }

        self.nodes.push(Node {
            id: EXIT_ID.to_owned(),
            kind: NodeKind::Exit,
            label: "End".to_owned(),
        });
        let last = match link {
            Link::Seq(id) | Link::Branch { decision: id, .. } => id,
        };
        self.add_edge(&last, EXIT_ID, None);

        FlowGraph {
            nodes: self.nodes,
            edges: self.edges,
            entry_id: ENTRY_ID.to_owned(),
            exit_id: EXIT_ID.to_owned(),
        }
    }

    /// Parses `if (cond)` at `lines[i]`, its Yes block, an optional `else`
    /// No block, and synthesizes the merge node. Returns the merge as the
    /// new sequential link and the index past the consumed lines.
    fn parse_if(&mut self, lines: &[String], at: usize, link: Link) -> (Link, usize) {
        let condition = extract_condition(&lines[at]);
        let decision = self.add_node(NodeKind::Decision, condition);
        self.connect(link, decision.clone());

        let mut i = skip_invisible(lines, at + 1);
        let (yes_end, next) = self.parse_branch(lines, i, &decision, Branch::Yes);
        i = skip_invisible(lines, next);

        let mut no_end = None;
        if lines.get(i).is_some_and(|line| get_else_re().is_match(line)) {
            i = skip_invisible(lines, i + 1);
            let (end, next) = self.parse_branch(lines, i, &decision, Branch::No);
            no_end = end;
            i = next;
        }

        let merge = self.add_node(NodeKind::Merge, String::new());
        match yes_end {
            Some(end) => self.add_edge(&end, &merge, None),
            // Empty branch: the decision reaches the merge directly, keeping
            // the branch label.
            None => self.add_edge(&decision, &merge, Some(Branch::Yes)),
        }
        match no_end {
            Some(end) => self.add_edge(&end, &merge, None),
            None => self.add_edge(&decision, &merge, Some(Branch::No)),
        }

        (Link::Seq(merge), i)
    }

    /// Parses one `{ ... }` branch block. The first node emitted inside
    /// connects to `decision` with the branch label; later nodes chain
    /// sequentially. Returns the branch's last node id, or `None` when the
    /// block emitted nothing (including when no block follows at all).
    fn parse_branch(
        &mut self,
        lines: &[String],
        at: usize,
        decision: &str,
        branch: Branch,
    ) -> (Option<String>, usize) {
        if lines.get(at).map(String::as_str) != Some("{") {
            return (None, at);
        }

        let mut depth = 1usize;
        let mut i = at + 1;
        let mut link = Link::Branch {
            decision: decision.to_owned(),
            branch,
        };
        while i < lines.len() && depth > 0 {
            let line = &lines[i];
            if line.is_empty() || line.starts_with('#') {
                i += 1;
                continue;
            }
            if line == "{" {
                depth += 1;
                i += 1;
                continue;
            }
            if line == "}" {
                depth -= 1;
                i += 1;
                continue;
            }
            if get_if_head_re().is_match(line) {
                let (next_link, next_i) = self.parse_if(lines, i, link);
                link = next_link;
                i = next_i;
                continue;
            }
            if let Some(label) = self.classifier.classify(line) {
                let id = self.add_node(NodeKind::Action, label);
                link = self.connect(link, id);
            }
            i += 1;
        }

        match link {
            Link::Seq(id) => (Some(id), i),
            Link::Branch { .. } => (None, i),
        }
    }

    fn add_node(&mut self, kind: NodeKind, label: String) -> String {
        self.next_id += 1;
        let id = match kind {
            NodeKind::Decision => format!("if{}", self.next_id),
            NodeKind::Merge => format!("merge{}", self.next_id),
            _ => format!("action{}", self.next_id),
        };
        self.nodes.push(Node {
            id: id.clone(),
            kind,
            label,
        });
        id
    }

    fn add_edge(&mut self, from: &str, to: &str, branch: Option<Branch>) {
        self.edges.push(Edge {
            from: from.to_owned(),
            to: to.to_owned(),
            branch,
        });
    }

    /// Emits the edge attaching `node` through `link` and returns the new
    /// sequential link.
    fn connect(&mut self, link: Link, node: String) -> Link {
        match link {
            Link::Seq(prev) => self.add_edge(&prev, &node, None),
            Link::Branch { decision, branch } => self.add_edge(&decision, &node, Some(branch)),
        }
        Link::Seq(node)
    }
}

/// Splits the raw body into logical lines with every brace on its own line,
/// so both Allman-style and single-line `{ stmt; }` blocks walk the same.
fn split_logical_lines(raw_text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in raw_text.lines() {
        let mut buffer = String::new();
        for ch in raw_line.chars() {
            if ch == '{' || ch == '}' {
                let piece = buffer.trim();
                if !piece.is_empty() {
                    lines.push(piece.to_owned());
                }
                buffer.clear();
                lines.push(ch.to_string());
            } else {
                buffer.push(ch);
            }
        }
        let piece = buffer.trim();
        lines.push(piece.to_owned());
    }
    lines
}

/// Extracts the condition text from an `if` line.
fn extract_condition(line: &str) -> String {
    get_if_condition_re()
        .captures(line)
        .map_or_else(
            || CONDITION_PLACEHOLDER.to_owned(),
            |captures| strip_comments(captures[1].trim()),
        )
}

/// Advances past empty lines and preprocessor directives, which are
/// invisible to the primary graph.
fn skip_invisible(lines: &[String], mut i: usize) -> usize {
    while i < lines.len() && (lines[i].is_empty() || lines[i].starts_with('#')) {
        i += 1;
    }
    i
}
