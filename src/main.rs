use readmebuddy::cli::commands::{CliArgs, Commands};
use readmebuddy::cli::handlers::handle_generate;
use readmebuddy::util::logging::{init_logging, parse_level, LoggingConfig};
use readmebuddy::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging(logging_config_from_args(&args));

    debug!("readmebuddy v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, args.quiet).await,
    };

    std::process::exit(exit_code);
}

fn logging_config_from_args(args: &CliArgs) -> LoggingConfig {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("READMEBUDDY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    let use_json = env::var("READMEBUDDY_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    LoggingConfig { level, use_json }
}
