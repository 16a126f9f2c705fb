//! Mermaid serialization of flow graphs and preprocessor lanes.
//!
//! Output is plain Markdown with a fenced `mermaid` code block, renderable
//! by standard Markdown flowchart tooling. Identifier and label sanitization
//! keeps generated text inside the Mermaid grammar; labels are never
//! truncated here (only the classifier's fallback rule truncates).

mod writer;

pub use writer::write_atomic;

use crate::constants::{get_id_char_re, get_underscore_run_re, get_whitespace_re};
use crate::graph::{ConditionalBranchGroup, FlowGraph, NodeKind};

/// Sanitizes text into a Mermaid identifier: `[A-Za-z0-9_]` only, collapsed
/// underscores, no leading/trailing underscore, and a `n_` prefix when the
/// result would start with a digit. Symbol-only input falls back to `_`
/// rather than an empty identifier.
#[must_use]
pub fn sanitize_id(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|ch| !matches!(ch, '\t' | '\n' | '\r' | '(' | ')' | ';'))
        .collect();
    let replaced = get_id_char_re().replace_all(&cleaned, "_");
    let collapsed = get_underscore_run_re().replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        "_".to_owned()
    } else if trimmed.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("n_{trimmed}")
    } else {
        trimmed.to_owned()
    }
}

/// Escapes label text for a Mermaid node body.
///
/// Tabs and newlines flatten to spaces, quotes become apostrophes, and the
/// Mermaid-reserved `#`, `|`, `&` tokens are spelled out. Whitespace runs
/// collapse to single spaces.
#[must_use]
pub fn escape_label(text: &str) -> String {
    let flattened = text
        .replace(['\t', '\n', '\r'], " ")
        .trim()
        .replace('"', "'")
        .replace('#', "num")
        .replace('|', " or ")
        .replace('&', " and ");
    get_whitespace_re()
        .replace_all(&flattened, " ")
        .trim()
        .to_owned()
}

/// Renders the primary flow chart document for one function.
#[must_use]
pub fn render_flow_chart(function_name: &str, graph: &FlowGraph) -> String {
    let mut out = format!("# Flow Chart for {function_name}\n\n");
    out.push_str("```mermaid\ngraph TD\n");
    out.push_str("    start([Start])\n\n");

    for node in &graph.nodes {
        match node.kind {
            NodeKind::Entry | NodeKind::Exit => {}
            NodeKind::Action => {
                out.push_str(&format!(
                    "    {}[\"{}\"]\n",
                    node.id,
                    escape_label(&node.label)
                ));
            }
            NodeKind::Decision => {
                out.push_str(&format!("    {}{{{}}}\n", node.id, escape_label(&node.label)));
            }
            NodeKind::Merge => {
                out.push_str(&format!("    {}[\" \"]\n", node.id));
            }
        }
    }

    out.push_str("\n    end_node([End])\n\n");

    for edge in &graph.edges {
        match edge.branch {
            Some(branch) => {
                out.push_str(&format!("    {} -- {branch} --> {}\n", edge.from, edge.to));
            }
            None => out.push_str(&format!("    {} --> {}\n", edge.from, edge.to)),
        }
    }

    out.push_str("```\n");
    out
}

/// Renders the secondary document with one lane per preprocessor guard.
///
/// Each lane is an independent linear chain inside a labeled subgraph; there
/// is no branching across lanes.
#[must_use]
pub fn render_switches(function_name: &str, lanes: &[ConditionalBranchGroup]) -> String {
    let mut out = format!("# Preprocessor Directive Function Switches for {function_name}\n\n");
    out.push_str("```mermaid\nflowchart TD\n");

    for lane in lanes {
        let subgraph_id = sanitize_id(&lane.guard_name);
        out.push_str(&format!(
            "  subgraph {subgraph_id}[\"{}\"]\n",
            lane.guard_name
        ));
        out.push_str("    direction LR\n");
        let mut previous: Option<String> = None;
        for (index, statement) in lane.statements.iter().enumerate() {
            let node_id = format!("{subgraph_id}_{index}");
            out.push_str(&format!("    {node_id}[{}]\n", escape_label(statement)));
            if let Some(prev) = previous {
                out.push_str(&format!("    {prev} --> {node_id}\n"));
            }
            previous = Some(node_id);
        }
        out.push_str("  end\n");
    }

    out.push_str("```\n");
    out
}
