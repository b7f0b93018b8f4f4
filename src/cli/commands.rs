use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI-assisted README generation for code repositories
#[derive(Parser, Debug)]
#[command(
    name = "readmebuddy",
    about = "AI-assisted README generation for code repositories",
    version,
    author,
    long_about = "readmebuddy inspects a repository's files to detect its technology stack, \
                  dependencies, run commands, license, and features, then assembles a \
                  structured README whose description is rewritten by an LLM. It accepts a \
                  GitHub repository URL or a local directory."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
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
        about = "Generate a README for a repository",
        long_about = "Generates a complete README.md for a GitHub repository or a local \
                      directory.\n\n\
                      Examples:\n  \
                      readmebuddy generate https://github.com/user/repo\n  \
                      readmebuddy generate ./my-project -o README.md\n  \
                      readmebuddy generate . --model gemini-2.0-flash"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "TARGET",
        help = "GitHub repository URL or path to a local directory"
    )]
    pub target: String,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model to use for description enhancement"
    )]
    pub model: Option<String>,

    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "60",
        help = "Enhancement request timeout in seconds"
    )]
    pub timeout: u64,
}
