//! Run-command detection
//!
//! Unlike ecosystem detection, sources here are cumulative: npm scripts,
//! Makefile targets, and per-ecosystem convention fallbacks all contribute,
//! in that fixed order.

use crate::source::ContentReader;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

static MAKE_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9_-]+):").expect("make target pattern"));

/// A labeled shell invocation surfaced in the README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCommand {
    pub name: String,
    pub command: String,
}

impl RunCommand {
    fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Scans for runnable commands. Discovery order is preserved: package.json
/// scripts first (in declaration order), then Makefile targets in file
/// order, then ecosystem-convention fallbacks.
pub async fn detect_run_commands(
    files: &[String],
    reader: &dyn ContentReader,
) -> Vec<RunCommand> {
    let mut commands = Vec::new();

    if let Some(path) = files.iter().find(|f| f.ends_with("package.json")) {
        if let Some(content) = reader.read(path).await {
            match serde_json::from_str::<Value>(&content) {
                Ok(pkg) => {
                    if let Some(scripts) = pkg.get("scripts").and_then(Value::as_object) {
                        for name in scripts.keys() {
                            commands.push(RunCommand::new(name, format!("npm run {}", name)));
                        }
                    }
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "failed to parse package.json scripts")
                }
            }
        }
    }

    if let Some(path) = files.iter().find(|f| f.ends_with("Makefile")) {
        if let Some(content) = reader.read(path).await {
            for line in content.lines() {
                if let Some(caps) = MAKE_TARGET.captures(line) {
                    let target = &caps[1];
                    if !target.starts_with('.') {
                        commands.push(RunCommand::new(target, format!("make {}", target)));
                    }
                }
            }
        }
    }

    if files.iter().any(|f| f.ends_with("Cargo.toml")) {
        commands.push(RunCommand::new("Build", "cargo build"));
        commands.push(RunCommand::new("Run", "cargo run"));
        commands.push(RunCommand::new("Test", "cargo test"));
    }
    if files.iter().any(|f| f.ends_with("go.mod")) {
        commands.push(RunCommand::new("Run", "go run ."));
        commands.push(RunCommand::new("Build", "go build"));
    }

    commands
}
