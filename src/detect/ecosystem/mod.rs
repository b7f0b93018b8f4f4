//! Ecosystem detection: priority-ordered manifest dispatch
//!
//! Manifest candidates are checked in a fixed priority order and the first
//! ecosystem whose manifest appears in the file list wins - ecosystems are
//! mutually exclusive in the result. Native mobile platforms (Android/iOS)
//! are an additive fallback tier that only applies when no manifest-backed
//! ecosystem was found.
//!
//! Parsers here are intentionally loose line/pattern scans, not strict
//! format parsers. The pubspec scan in particular picks up non-dependency
//! YAML keys; that over-match is a documented limitation, not a bug.

mod dotnet;
mod flutter;
mod go;
mod maven;
pub(crate) mod node;
mod python;
mod rust;

use super::StackReport;
use crate::source::ContentReader;
use async_trait::async_trait;
use tracing::debug;

/// One manifest-backed ecosystem in the priority chain.
#[async_trait]
trait Ecosystem: Send + Sync {
    fn name(&self) -> &'static str;

    /// Path of this ecosystem's manifest within the file list, if present.
    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str>;

    /// Parses the manifest into tech labels and dependencies. Malformed
    /// content contributes nothing beyond what was accumulated before the
    /// failure; this never errors.
    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport;
}

/// Detection priority order.
fn registry() -> Vec<Box<dyn Ecosystem>> {
    vec![
        Box::new(node::Node),
        Box::new(python::Python),
        Box::new(rust::Cargo),
        Box::new(go::Go),
        Box::new(maven::Maven),
        Box::new(flutter::Flutter),
        Box::new(dotnet::DotNet),
    ]
}

/// Scans the file list for known manifests and returns the tech stack and
/// dependency map of the first ecosystem found.
pub async fn detect_stack(files: &[String], reader: &dyn ContentReader) -> StackReport {
    for ecosystem in registry() {
        if let Some(manifest) = ecosystem.locate(files) {
            debug!(ecosystem = ecosystem.name(), manifest, "manifest found");
            return ecosystem.parse(manifest, reader).await.finish();
        }
    }

    // No manifest-backed ecosystem: check native mobile markers, additively.
    let mut report = StackReport::default();
    if files
        .iter()
        .any(|f| f.contains("AndroidManifest.xml") || f.contains("build.gradle"))
    {
        report.add_tech("Android (Native)");
    }
    if files
        .iter()
        .any(|f| f.ends_with(".xcodeproj") || f.contains("Info.plist"))
    {
        report.add_tech("iOS (Native)");
    }
    report.finish()
}
