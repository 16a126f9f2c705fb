use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::commands::create_flow_chart;
use crate::config;
use crate::constants::DEFAULT_OUTPUT_ROOT;

/// Runs the diagram generator with the given arguments using stdout as the
/// writer.
///
/// # Errors
///
/// Returns an error only when writing to stdout fails; engine failures are
/// reported through the exit code.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the diagram generator, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error only when writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["flowscribe".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured
                    // by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(2);
                }
            }
        }
    };

    let output_root = resolve_output_root(&cli);

    if cli.verbose && !cli.json {
        eprintln!("[VERBOSE] flowscribe v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Function: {}", cli.function_name);
        eprintln!("[VERBOSE] Source: {}", cli.file.display());
        eprintln!("[VERBOSE] Output root: {}", output_root.display());
    }

    match create_flow_chart(&cli.function_name, &cli.file, &output_root) {
        Ok(output) => {
            if cli.json {
                let payload = serde_json::json!({
                    "status": "ok",
                    "md_path": output.md_path,
                    "switches_path": output.switches_path,
                });
                writeln!(writer, "{payload}")?;
            } else {
                writeln!(
                    writer,
                    "{} {}",
                    "Flow chart created at".green(),
                    output.md_path.display()
                )?;
                if let Some(switches) = &output.switches_path {
                    writeln!(
                        writer,
                        "{} {}",
                        "Function switches written to".green(),
                        switches.display()
                    )?;
                }
            }
            writer.flush()?;
            Ok(0)
        }
        Err(err) => {
            if cli.json {
                let payload = serde_json::json!({
                    "status": "error",
                    "message": err.to_string(),
                });
                writeln!(writer, "{payload}")?;
                writer.flush()?;
            } else {
                eprintln!("{} {err}", "Error:".red().bold());
            }
            Ok(1)
        }
    }
}

/// Picks the output root: CLI flag, then `flowscribe.toml` next to (or
/// above) the input file, then the built-in default.
fn resolve_output_root(cli: &Cli) -> PathBuf {
    if let Some(out) = &cli.out {
        return out.clone();
    }
    config::load_from_path(&cli.file)
        .flowscribe
        .output_root
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT))
}
