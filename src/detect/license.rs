//! License detection
//!
//! Order: explicit manifest field, then a LICENSE-like file matched against
//! known license phrases, then the license file's base name as a fallback.

use super::ecosystem::node::find_package_json;
use crate::source::ContentReader;
use serde_json::Value;
use tracing::warn;

/// Known license phrases, checked against the first ~200 characters of a
/// license file. First match wins.
const LICENSE_PHRASES: &[(&str, &str)] = &[
    ("mit license", "MIT"),
    ("apache license 2.0", "Apache-2.0"),
    ("gnu general public license", "GPL"),
    ("bsd 3-clause", "BSD-3-Clause"),
    ("bsd 2-clause", "BSD-2-Clause"),
    ("mozilla public license 2.0", "MPL-2.0"),
    ("the unlicense", "Unlicense"),
];

pub async fn detect_license(files: &[String], reader: &dyn ContentReader) -> Option<String> {
    if let Some(path) = find_package_json(files) {
        if let Some(content) = reader.read(path).await {
            match serde_json::from_str::<Value>(&content) {
                Ok(pkg) => {
                    if let Some(license) = manifest_license(&pkg) {
                        return Some(license);
                    }
                }
                Err(e) => {
                    warn!(path, error = %e, "failed to parse package.json for license")
                }
            }
        }
    }

    let license_file = files.iter().find(|f| {
        let lower = f.to_lowercase();
        lower.starts_with("license") || lower.starts_with("licence")
    })?;

    if let Some(content) = reader.read(license_file).await {
        let head: String = content.chars().take(200).collect();
        let head = head.to_lowercase();
        for (phrase, id) in LICENSE_PHRASES {
            if head.contains(phrase) {
                return Some((*id).to_string());
            }
        }
    }

    // Fall back to the file name with its extension stripped.
    let name = license_file.rsplit('/').next().unwrap_or(license_file);
    Some(name.split('.').next().unwrap_or(name).to_string())
}

/// `license` may be a plain string or a `{ "type": ... }` object.
fn manifest_license(pkg: &Value) -> Option<String> {
    match pkg.get("license")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("type")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::MockReader;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_manifest_field_wins() {
        let reader = MockReader::with_files([
            ("package.json", r#"{"license": "Apache-2.0"}"#),
            ("LICENSE", "MIT License\n\nPermission is hereby granted..."),
        ]);
        let files = paths(&["package.json", "LICENSE"]);
        assert_eq!(
            detect_license(&files, &reader).await.as_deref(),
            Some("Apache-2.0")
        );
    }

    #[tokio::test]
    async fn test_manifest_license_object_form() {
        let reader =
            MockReader::with_files([("package.json", r#"{"license": {"type": "MIT"}}"#)]);
        let files = paths(&["package.json"]);
        assert_eq!(detect_license(&files, &reader).await.as_deref(), Some("MIT"));
    }

    #[tokio::test]
    async fn test_license_file_phrase_match() {
        let reader = MockReader::with_files([(
            "LICENSE",
            "MIT License\n\nCopyright (c) 2024\n\nPermission is hereby granted, free of charge...",
        )]);
        let files = paths(&["LICENSE", "src/main.rs"]);
        assert_eq!(detect_license(&files, &reader).await.as_deref(), Some("MIT"));
    }

    #[tokio::test]
    async fn test_unrecognized_content_falls_back_to_filename() {
        let reader = MockReader::with_files([("LICENSE.txt", "Custom license terms.")]);
        let files = paths(&["LICENSE.txt"]);
        assert_eq!(
            detect_license(&files, &reader).await.as_deref(),
            Some("LICENSE")
        );
    }

    #[tokio::test]
    async fn test_unreadable_license_file_falls_back_to_filename() {
        let reader = MockReader::new();
        let files = paths(&["LICENCE.md"]);
        assert_eq!(
            detect_license(&files, &reader).await.as_deref(),
            Some("LICENCE")
        );
    }

    #[tokio::test]
    async fn test_nothing_found_is_none() {
        let reader = MockReader::new();
        let files = paths(&["src/main.rs"]);
        assert!(detect_license(&files, &reader).await.is_none());
    }

    #[tokio::test]
    async fn test_phrase_priority_order() {
        // Both MIT and GPL phrases present; MIT is earlier in the table.
        let reader = MockReader::with_files([(
            "LICENSE",
            "MIT License, not the GNU General Public License",
        )]);
        let files = paths(&["LICENSE"]);
        assert_eq!(detect_license(&files, &reader).await.as_deref(), Some("MIT"));
    }
}
