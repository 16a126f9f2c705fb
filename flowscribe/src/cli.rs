use clap::Parser;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the function to generate a flow chart for.
    pub function_name: String,

    /// Path to the source file containing the function.
    pub file: PathBuf,

    /// Directory where the generated Markdown documents are written.
    /// Defaults to the configured output root, or `Gen`.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output the result summary as raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Print progress details to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}
