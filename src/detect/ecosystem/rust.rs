//! Rust ecosystem (Cargo.toml)
//!
//! Line scan over the `[dependencies]` section, not a TOML parser: each
//! entry line is split on its first `=` and stripped of quotes, so inline
//! table values come through as raw text. That looseness is intentional.

use super::Ecosystem;
use crate::detect::{StackReport, LATEST};
use crate::source::ContentReader;
use async_trait::async_trait;

pub(super) struct Cargo;

#[async_trait]
impl Ecosystem for Cargo {
    fn name(&self) -> &'static str {
        "Cargo"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with("Cargo.toml"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech("Rust");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };

        let mut in_dependencies = false;
        for line in content.lines() {
            let line = line.trim();
            if line == "[dependencies]" {
                in_dependencies = true;
            } else if line.starts_with('[') {
                in_dependencies = false;
            } else if in_dependencies && !line.is_empty() && !line.starts_with('#') {
                match line.split_once('=') {
                    Some((name, version)) => {
                        let name = strip_quotes(name.trim());
                        let version = strip_quotes(version.trim());
                        if !name.is_empty() {
                            if version.is_empty() {
                                report.deps.insert(name, LATEST);
                            } else {
                                report.deps.insert(name, version);
                            }
                        }
                    }
                    None => {
                        let name = strip_quotes(line);
                        if !name.is_empty() {
                            report.deps.insert(name, LATEST);
                        }
                    }
                }
            }
        }
        report
    }
}

fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '"' && *c != '\'').collect()
}
