//! Python ecosystem (requirements.txt)

use super::Ecosystem;
use crate::detect::{StackReport, LATEST};
use crate::source::ContentReader;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

/// name, optional operator, optional version
static REQUIREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_-]+)(?:(==|>=|<=|~=|>|<)(.*))?$").expect("requirement pattern")
});

pub(super) struct Python;

#[async_trait]
impl Ecosystem for Python {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with("requirements.txt"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech("Python");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, version) = parse_requirement(line);
            if !name.is_empty() {
                report.deps.insert(name, version);
            }
        }
        report
    }
}

/// Splits a requirement line into name and version. Lines the pattern cannot
/// handle (extras, URLs, markers) fall back to the raw text as the name.
fn parse_requirement(line: &str) -> (String, String) {
    match REQUIREMENT.captures(line) {
        Some(caps) => {
            let name = caps
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or_default()
                .to_string();
            let version = caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty())
                .unwrap_or(LATEST)
                .to_string();
            (name, version)
        }
        None => (line.trim().to_string(), LATEST.to_string()),
    }
}
