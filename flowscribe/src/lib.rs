//! `flowscribe` — control-flow extraction and Mermaid diagram synthesis for
//! C-like firmware functions.
//!
//! Given the raw text of a single function (messaging macros, preprocessor
//! guards, nested conditionals), the engine reconstructs the function's
//! control-flow structure and renders it as a Markdown-embeddable Mermaid
//! flowchart. Preprocessor-guarded statement runs are rendered separately as
//! one lane per `#ifdef` guard.
//!
//! The pipeline is a strict, single-threaded transformation:
//!
//! 1. [`locator`] extracts the function body from the file text by signature
//!    scan and brace balancing.
//! 2. [`rules`] normalizes each raw statement into a semantic label (or drops
//!    it) through an ordered rule chain.
//! 3. [`graph`] assembles the node/edge graph by recursive descent over the
//!    classified statements, and independently collects `#ifdef` lanes.
//! 4. [`render`] serializes both graphs to Mermaid and atomically publishes
//!    the output files.
//!
//! Every stage is a pure function of its input except the final write. This
//! is a best-effort diagrammer, not a compiler: malformed input degrades to
//! placeholder labels rather than failing the whole diagram.

/// Command line argument definitions.
pub mod cli;
/// High-level diagram generation pipeline.
pub mod commands;
/// Optional `flowscribe.toml` configuration discovery.
pub mod config;
/// Compiled regular expression accessors.
pub mod constants;
/// Shared CLI entry point.
pub mod entry_point;
/// Engine error taxonomy.
pub mod error;
/// Control-flow graph model, builder, and preprocessor lanes.
pub mod graph;
/// Function location and body extraction.
pub mod locator;
/// Mermaid rendering and atomic output writing.
pub mod render;
/// Statement classification rule chain.
pub mod rules;

pub use commands::{create_flow_chart, DiagramOutput};
pub use error::EngineError;
