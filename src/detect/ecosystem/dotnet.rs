//! .NET ecosystem (*.csproj)

use super::Ecosystem;
use crate::detect::StackReport;
use crate::source::ContentReader;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<PackageReference Include="(.*?)" Version="(.*?)" />"#)
        .expect("package reference pattern")
});

pub(super) struct DotNet;

#[async_trait]
impl Ecosystem for DotNet {
    fn name(&self) -> &'static str {
        ".NET"
    }

    fn locate<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        files
            .iter()
            .find(|f| f.ends_with(".csproj"))
            .map(String::as_str)
    }

    async fn parse(&self, manifest_path: &str, reader: &dyn ContentReader) -> StackReport {
        let mut report = StackReport::default();
        report.add_tech(".NET");

        let Some(content) = reader.read(manifest_path).await else {
            return report;
        };
        for caps in PACKAGE_REFERENCE.captures_iter(&content) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let version = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            if !name.is_empty() {
                report.deps.insert(name, version);
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::MockReader;

    const CSPROJ: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.3" />
    <PackageReference Include="Serilog" Version="3.1.1" />
  </ItemGroup>
</Project>
"#;

    #[tokio::test]
    async fn test_package_references() {
        let reader = MockReader::with_files([("App.csproj", CSPROJ)]);
        let report = DotNet.parse("App.csproj", &reader).await;

        assert_eq!(report.tech, vec![".NET"]);
        assert_eq!(report.deps.get("Newtonsoft.Json"), Some("13.0.3"));
        assert_eq!(report.deps.get("Serilog"), Some("3.1.1"));
    }

    #[test]
    fn test_locate_matches_extension() {
        let files = vec!["src/App/App.csproj".to_string()];
        assert_eq!(DotNet.locate(&files), Some("src/App/App.csproj"));
    }
}
