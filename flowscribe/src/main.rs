//! Main binary entry point for the `flowscribe` diagram generator.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function so behavior stays consistent across all entry points.

use anyhow::Result;

fn main() -> Result<()> {
    let code = flowscribe::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
