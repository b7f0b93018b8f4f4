//! Command handlers
//!
//! Each handler owns one subcommand end to end and returns a process exit
//! code. Errors are reported to stderr; the generated document goes to
//! stdout or the requested output file.

use super::commands::GenerateArgs;
use crate::enhance::genai::{GenAiEnhancer, DEFAULT_MODEL};
use crate::generator::ReadmeGenerator;
use crate::source::github::GithubSource;
use crate::source::local::LocalSource;
use crate::source::{ContentReader, ProjectInput};
use std::time::Duration;
use tracing::{error, info};

pub async fn handle_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    let model = args.model.as_deref().unwrap_or(DEFAULT_MODEL);
    let enhancer = GenAiEnhancer::new(model, Duration::from_secs(args.timeout));

    let result = if args.target.starts_with("http://") || args.target.starts_with("https://") {
        generate_from_github(&args.target, &enhancer).await
    } else {
        generate_from_local(&args.target, &enhancer).await
    };

    let readme = match result {
        Ok(readme) => readme,
        Err(e) => {
            error!("generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            return 1;
        }
    };

    if let Some(path) = &args.output {
        if let Err(e) = std::fs::write(path, &readme) {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            return 1;
        }
        if !quiet {
            println!("README written to {}", path.display());
        }
    } else {
        println!("{}", readme);
    }

    0
}

async fn generate_from_github(url: &str, enhancer: &GenAiEnhancer) -> anyhow::Result<String> {
    let source = GithubSource::from_url(url)?;
    let project = source.fetch_project().await?;
    run_pipeline(&project, &source, enhancer).await
}

async fn generate_from_local(path: &str, enhancer: &GenAiEnhancer) -> anyhow::Result<String> {
    let source = LocalSource::new(path)?;
    let project = source.scan();
    run_pipeline(&project, &source, enhancer).await
}

async fn run_pipeline(
    project: &ProjectInput,
    reader: &dyn ContentReader,
    enhancer: &GenAiEnhancer,
) -> anyhow::Result<String> {
    info!("analyzing {}", project.name);
    let generator = ReadmeGenerator::new(enhancer);
    Ok(generator.generate(project, reader).await?)
}
