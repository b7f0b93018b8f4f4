//! Java/Maven ecosystem (pom.xml)
//!
//! Dependency blocks are matched structurally over the raw XML text.
//! The artifactId is the dependency key.

use super::Ecosystem;
use crate::detect::StackReport;
use crate::source::ContentReader;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

static DEPENDENCY_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)<dependency>.*?<groupId>(.*?)</groupId>.*?<artifactId>(.*?)</artifactId>.*?<version>(.*?)</version>.*?</dependency>",
    )
    .expect("dependency block pattern")
});

pub(super) struct Maven;

#[async_trait]
impl Ecosystem for Maven {
    fn name(&self) -> &'static str {
        "Maven"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with("pom.xml"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech("Java (Maven)");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        for caps in DEPENDENCY_BLOCK.captures_iter(&content) {
            let artifact_id = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            let version = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
            if !artifact_id.is_empty() && !version.is_empty() {
                report.deps.insert(artifact_id, version);
            }
        }
        report
    }
}
