use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Heuristic project stack detection with a round-trippable discipline config
#[derive(Parser, Debug)]
#[command(
    name = "stackscan",
    about = "Detect a project's technology stack and render it as a discipline config",
    version,
    long_about = "stackscan probes a fixed set of marker files and dependency manifests to \
                  infer a project's stack, then renders the result as a front-matter \
                  document. A previously rendered document can be read back as JSON."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the project stack and print the rendered config",
        long_about = "Probes marker files, lockfiles, and manifests under the project root \
                      and prints the rendered discipline config to stdout.\n\n\
                      Examples:\n  \
                      stackscan detect\n  \
                      stackscan detect /path/to/project\n  \
                      stackscan detect -o .stackscan/stack.local.md"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Read a previously rendered config back as JSON",
        long_about = "Parses the front-matter of the config document under the project root \
                      and prints it as JSON. Prints {} when the document is missing or \
                      malformed; never fails.\n\n\
                      Examples:\n  \
                      stackscan read\n  \
                      stackscan read /path/to/project"
    )]
    Read(ReadArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to current directory)"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the rendered document to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ReadArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to current directory)"
    )]
    pub project_root: Option<PathBuf>,
}
