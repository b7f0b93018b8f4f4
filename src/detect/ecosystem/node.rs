//! Node ecosystem (package.json)
//!
//! Highest-priority ecosystem: the mere presence of a package.json claims
//! the project for the JS ecosystem even when its content cannot be read
//! or parsed.

use super::Ecosystem;
use crate::detect::StackReport;
use crate::source::ContentReader;
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// Framework markers checked against production dependencies, in priority
/// order. The match order only affects which label claims "specific
/// framework" status first; all matching labels are added.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("react-native", "React Native"),
    ("next", "Next.js"),
    ("react", "React"),
    ("express", "Express.js"),
    ("vue", "Vue.js"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
];

pub(super) struct Node;

#[async_trait]
impl Ecosystem for Node {
    fn name(&self) -> &'static str {
        "Node"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        find_package_json(files)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        let pkg: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = manifest_path, error = %e, "failed to parse package.json");
                return report;
            }
        };

        let empty = serde_json::Map::new();
        let production = pkg
            .get("dependencies")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let dev = pkg
            .get("devDependencies")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let mut has_framework = false;
        for (marker, label) in FRAMEWORKS {
            if production.contains_key(*marker) {
                report.add_tech(label);
                has_framework = true;
            }
        }

        // TypeScript is an additional label, not a framework claim.
        if production.contains_key("typescript") || dev.contains_key("typescript") {
            report.add_tech("TypeScript");
        }
        if !has_framework && !production.is_empty() {
            report.add_tech("Node.js");
        }
        if production.contains_key("flask") {
            report.add_tech("Flask");
        }
        if production.contains_key("django") {
            report.add_tech("Django");
        }

        for (name, version) in production {
            report.deps.insert(name.clone(), version_string(version));
        }
        report
    }
}

/// An exact root-level `package.json` beats any nested match.
pub(crate) fn find_package_json(files: &[String]) -> Option<&str> {
    files
        .iter()
        .find(|f| *f == "package.json")
        .or_else(|| files.iter().find(|f| f.ends_with("package.json")))
        .map(String::as_str)
}

fn version_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
