use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::EngineError;
use crate::graph::{build_flow_graph, extract_switch_lanes};
use crate::locator::locate_function;
use crate::render::{render_flow_chart, render_switches, write_atomic};
use crate::rules::Classifier;

/// Paths of the documents produced by one diagram run.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramOutput {
    /// Primary flow chart document.
    pub md_path: PathBuf,
    /// Secondary switches document, present only when preprocessor-guarded
    /// statement runs were found.
    pub switches_path: Option<PathBuf>,
}

/// Generates the flow chart documents for one function.
///
/// Locates the function in `file_path`, reconstructs its control-flow graph
/// and preprocessor lanes, renders both to Mermaid Markdown, and atomically
/// writes the results under `output_root` (created if absent).
///
/// All entities are created fresh per invocation; there is no state across
/// calls except the written files.
///
/// # Errors
///
/// Returns [`EngineError::InputRequired`] for empty inputs,
/// [`EngineError::Read`] when the source file cannot be read,
/// [`EngineError::NotFound`] / [`EngineError::UnbalancedBraces`] from the
/// locator, and [`EngineError::Write`] when publishing the output fails.
pub fn create_flow_chart(
    function_name: &str,
    file_path: &Path,
    output_root: &Path,
) -> Result<DiagramOutput, EngineError> {
    if function_name.trim().is_empty() {
        return Err(EngineError::InputRequired("function_name"));
    }
    if file_path.as_os_str().is_empty() {
        return Err(EngineError::InputRequired("file_path"));
    }
    if output_root.as_os_str().is_empty() {
        return Err(EngineError::InputRequired("output_root"));
    }

    // Lenient read: stray encoding damage in vendor headers must not fail
    // the diagram.
    let bytes = std::fs::read(file_path).map_err(|source| EngineError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let function = locate_function(&source, function_name)?;
    let classifier = Classifier::new();

    let graph = build_flow_graph(&function, &classifier);
    let lanes = extract_switch_lanes(&function.raw_text, &classifier);

    let chart = render_flow_chart(function_name, &graph);
    let md_path = write_atomic(output_root, &format!("{function_name}.md"), &chart)?;

    let switches_path = if lanes.is_empty() {
        None
    } else {
        let switches = render_switches(function_name, &lanes);
        Some(write_atomic(
            output_root,
            &format!("{function_name}_switches.md"),
            &switches,
        )?)
    };

    Ok(DiagramOutput {
        md_path,
        switches_path,
    })
}
