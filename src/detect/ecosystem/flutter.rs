//! Flutter ecosystem (pubspec.yaml)
//!
//! Coarse heuristic: every non-comment `key: value` line becomes a
//! dependency entry, so non-dependency YAML keys (name, sdk constraints)
//! are picked up too. Known over-match, kept by design.

use super::Ecosystem;
use crate::detect::StackReport;
use crate::source::ContentReader;
use async_trait::async_trait;

pub(super) struct Flutter;

#[async_trait]
impl Ecosystem for Flutter {
    fn name(&self) -> &'static str {
        "Flutter"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with("pubspec.yaml"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech("Flutter");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        for line in content.lines() {
            if let Some((name, version)) = line.split_once(':') {
                let name = name.trim();
                let version = version.trim();
                if !name.is_empty() && !name.starts_with('#') && !version.is_empty() {
                    report.deps.insert(name, version);
                }
            }
        }
        report
    }
}
