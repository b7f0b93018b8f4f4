//! Go ecosystem (go.mod)
//!
//! Only single-line `require` directives are parsed; requirements inside
//! `require ( ... )` blocks are not picked up.

use super::Ecosystem;
use crate::detect::{StackReport, LATEST};
use crate::source::ContentReader;
use async_trait::async_trait;

pub(super) struct Go;

#[async_trait]
impl Ecosystem for Go {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with("go.mod"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech("Go");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        for line in content.lines() {
            if let Some(rest) = line.strip_prefix("require ") {
                let mut parts = rest.split_whitespace();
                if let Some(name) = parts.next() {
                    let version = parts.next().unwrap_or(LATEST);
                    report.deps.insert(name, version);
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::MockReader;

    #[tokio::test]
    async fn test_single_line_requires() {
        let reader = MockReader::with_files([(
            "go.mod",
            "module example.com/demo\n\ngo 1.21\n\nrequire github.com/gin-gonic/gin v1.9.1\nrequire golang.org/x/sync v0.5.0\n",
        )]);
        let report = Go.parse("go.mod", &reader).await;

        assert_eq!(report.tech, vec!["Go"]);
        assert_eq!(report.deps.get("github.com/gin-gonic/gin"), Some("v1.9.1"));
        assert_eq!(report.deps.get("golang.org/x/sync"), Some("v0.5.0"));
    }

    #[tokio::test]
    async fn test_require_without_version() {
        let reader = MockReader::with_files([("go.mod", "require example.com/pkg\n")]);
        let report = Go.parse("go.mod", &reader).await;
        assert_eq!(report.deps.get("example.com/pkg"), Some("latest"));
    }
}
