use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the diagram engine.
///
/// All variants are recoverable-by-caller conditions: the engine never
/// panics on malformed-but-parseable input, it degrades to placeholder
/// labels instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input was missing or empty. The caller must resupply it.
    #[error("{0} is required")]
    InputRequired(&'static str),

    /// The function signature was not found in the file. The pattern used
    /// for the scan is included to aid debugging.
    #[error("function '{function}' not found in file. Pattern used: {pattern}")]
    NotFound {
        /// Name of the function that was searched for.
        function: String,
        /// The regex pattern the scan used.
        pattern: String,
    },

    /// Body extraction reached end-of-file before brace depth returned to
    /// zero.
    #[error("could not extract complete function body: brace depth {depth} at byte {position}")]
    UnbalancedBraces {
        /// Brace depth when the scan ran out of input.
        depth: usize,
        /// Byte offset of the last scanned position.
        position: usize,
    },

    /// Reading the source file failed.
    #[error("failed to read {path}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Writing an output document failed. No partially written file is left
    /// behind.
    #[error("failed to write {path}")]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: std::io::Error,
    },
}
