//! Markdown document assembly
//!
//! Renders all detected facts into one Markdown string in a fixed section
//! order: title, badges, description, features, tech stack, dependencies,
//! run commands, project structure, development setup, contributing guide,
//! license, footer. Sections with no content are omitted entirely.

use super::tree::render_tree;
use super::vocab;
use crate::detect::{DependencyMap, RunCommand};

/// Dependencies rendered in the README are capped at this many entries.
const MAX_DEPENDENCIES: usize = 15;

const FALLBACK_CLONE_URL: &str = "https://github.com/your-username/repo.git";

/// Detected facts feeding one document render.
pub struct AssembleContext<'a> {
    pub name: &'a str,
    /// Enhanced description (already rewritten by the enhancer).
    pub description: &'a str,
    pub tech: &'a [String],
    pub deps: &'a DependencyMap,
    pub commands: &'a [RunCommand],
    pub license: Option<&'a str>,
    pub features: &'a [String],
    pub files: &'a [String],
    pub repo_url: Option<&'a str>,
}

pub fn assemble(ctx: &AssembleContext<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}\n", ctx.name));

    let badges = render_badges(ctx.tech, ctx.license);
    if !badges.is_empty() {
        lines.push(format!("{}\n", badges));
    }

    lines.push(format!("## 📝 Description\n\n{}\n", ctx.description));

    if !ctx.features.is_empty() {
        lines.push("## ✨ Features\n".to_string());
        for feature in ctx.features {
            let marker = vocab::lookup(vocab::FEATURE_EMOJIS, feature).unwrap_or("•");
            lines.push(format!("- {} {}", marker, title_case(feature)));
        }
        lines.push("\n".to_string());
    }

    if !ctx.tech.is_empty() {
        lines.push("## 🛠️ Tech Stack\n".to_string());
        for label in ctx.tech {
            let icon = vocab::lookup(vocab::TECH_ICONS, label).unwrap_or("•");
            lines.push(format!("- {} {}", icon, label));
        }
        lines.push("\n".to_string());
    }

    if !ctx.deps.is_empty() {
        lines.push("## 📦 Key Dependencies\n".to_string());
        lines.push("```".to_string());
        for (name, version) in ctx.deps.iter().take(MAX_DEPENDENCIES) {
            lines.push(format!("{}: {}", name, version));
        }
        lines.push("```\n".to_string());
    }

    if !ctx.commands.is_empty() {
        lines.push("## 🚀 Run Commands\n".to_string());
        for cmd in ctx.commands {
            lines.push(format!("- **{}**: `{}`", cmd.name, cmd.command));
        }
        lines.push("\n".to_string());
    }

    lines.push("## 📁 Project Structure\n".to_string());
    lines.push(format!("{}\n", render_tree(ctx.files)));

    let setup = render_development_setup(ctx.tech);
    if !setup.is_empty() {
        lines.push(format!("{}\n", setup));
    }

    lines.push(format!("{}\n", render_contributing(ctx.repo_url)));

    if let Some(license) = ctx.license {
        lines.push("## 📜 License\n".to_string());
        lines.push(format!(
            "This project is licensed under the {} License.\n",
            license
        ));
    }

    lines.push("---\n*This README was generated with ❤️ by readmebuddy*".to_string());

    lines.join("\n")
}

fn render_badges(tech: &[String], license: Option<&str>) -> String {
    let mut badges = Vec::new();
    for label in tech {
        if vocab::BADGE_TECH.contains(&label.as_str()) {
            let slug = label
                .to_lowercase()
                .replacen(".js", "js", 1)
                .replacen(' ', "", 1);
            badges.push(format!(
                "![{}](https://img.shields.io/badge/-{}-blue?logo={}&logoColor=white)",
                label, label, slug
            ));
        }
    }

    if let Some(license) = license {
        let id: String = license
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        badges.push(format!(
            "![License](https://img.shields.io/badge/license-{}-green)",
            id
        ));
    }

    badges.join(" ")
}

fn render_development_setup(tech: &[String]) -> String {
    let mut sections = vec!["## 🛠️ Development Setup".to_string()];

    for snippet in vocab::SETUP_SNIPPETS {
        if snippet.labels.iter().any(|l| tech.iter().any(|t| t == l)) {
            sections.push(snippet.text.to_string());
        }
    }

    if sections.len() == 1 {
        return String::new();
    }
    sections.join("\n")
}

fn render_contributing(repo_url: Option<&str>) -> String {
    let clone_url = match repo_url {
        Some(url) => format!("{}.git", url.strip_suffix(".git").unwrap_or(url)),
        None => FALLBACK_CLONE_URL.to_string(),
    };

    format!(
        "## 👥 Contributing

Contributions are welcome! Here's how you can help:

1. **Fork** the repository
2. **Clone** your fork: `git clone {}`
3. **Create** a new branch: `git checkout -b feature/your-feature`
4. **Commit** your changes: `git commit -am 'Add some feature'`
5. **Push** to your branch: `git push origin feature/your-feature`
6. **Open** a pull request

Please ensure your code follows the project's style guidelines and includes tests where applicable.",
        clone_url
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_context<'a>(
        tech: &'a [String],
        deps: &'a DependencyMap,
        commands: &'a [RunCommand],
        features: &'a [String],
        files: &'a [String],
    ) -> AssembleContext<'a> {
        AssembleContext {
            name: "demo",
            description: "A demo project.",
            tech,
            deps,
            commands,
            license: None,
            features,
            files,
            repo_url: None,
        }
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let tech = vec![];
        let deps = DependencyMap::new();
        let commands = vec![];
        let features = vec![];
        let files = vec!["main.c".to_string()];

        let doc = assemble(&base_context(&tech, &deps, &commands, &features, &files));
        assert!(doc.starts_with("# demo\n"));
        assert!(doc.contains("## 📝 Description"));
        assert!(!doc.contains("## ✨ Features"));
        assert!(!doc.contains("## 🛠️ Tech Stack"));
        assert!(!doc.contains("## 📦 Key Dependencies"));
        assert!(!doc.contains("## 🚀 Run Commands"));
        assert!(!doc.contains("## 🛠️ Development Setup"));
        assert!(!doc.contains("## 📜 License"));
        assert!(doc.contains("## 📁 Project Structure"));
        assert!(doc.contains("## 👥 Contributing"));
        assert!(doc.ends_with("*This README was generated with ❤️ by readmebuddy*"));
    }

    #[test]
    fn test_section_order() {
        let tech = vec!["Rust".to_string()];
        let mut deps = DependencyMap::new();
        deps.insert("serde", "1.0");
        let commands = vec![RunCommand {
            name: "Build".to_string(),
            command: "cargo build".to_string(),
        }];
        let features = vec!["cli".to_string()];
        let files = vec!["src/main.rs".to_string()];

        let mut ctx = base_context(&tech, &deps, &commands, &features, &files);
        ctx.license = Some("MIT");
        let doc = assemble(&ctx);

        let order = [
            "# demo",
            "## 📝 Description",
            "## ✨ Features",
            "## 🛠️ Tech Stack",
            "## 📦 Key Dependencies",
            "## 🚀 Run Commands",
            "## 📁 Project Structure",
            "## 🛠️ Development Setup",
            "## 👥 Contributing",
            "## 📜 License",
        ];
        let mut last = 0;
        for heading in order {
            let pos = doc.find(heading).unwrap_or_else(|| panic!("{heading} missing"));
            assert!(pos >= last, "{heading} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_dependency_cap() {
        let tech = vec![];
        let mut deps = DependencyMap::new();
        for i in 0..20 {
            deps.insert(format!("dep{:02}", i), "1.0");
        }
        let commands = vec![];
        let features = vec![];
        let files = vec!["index.js".to_string()];

        let doc = assemble(&base_context(&tech, &deps, &commands, &features, &files));
        assert!(doc.contains("dep00: 1.0"));
        assert!(doc.contains("dep14: 1.0"));
        assert!(!doc.contains("dep15: 1.0"));
    }

    #[test]
    fn test_badges() {
        let tech = vec!["Next.js".to_string(), "TypeScript".to_string()];
        let badges = render_badges(&tech, Some("MIT"));
        assert!(badges.contains("logo=nextjs"));
        assert!(badges.contains("logo=typescript"));
        assert!(badges.contains("license-MIT-green"));
    }

    #[test]
    fn test_express_gets_badge() {
        let tech = vec!["Express.js".to_string()];
        let badges = render_badges(&tech, None);
        assert!(badges.contains("badge/-Express.js-blue"));
        assert!(badges.contains("logo=expressjs"));
    }

    #[test]
    fn test_badge_slug_replaces_first_space_only() {
        let tech = vec!["React Native".to_string()];
        let badges = render_badges(&tech, None);
        assert!(badges.contains("logo=reactnative"));
    }

    #[test]
    fn test_non_whitelisted_tech_gets_no_badge() {
        let tech = vec!["Rust".to_string()];
        assert!(render_badges(&tech, None).is_empty());
    }

    #[test]
    fn test_license_badge_strips_odd_characters() {
        let badges = render_badges(&[], Some("MIT OR Apache-2.0"));
        assert!(badges.contains("license-MITORApache-20-green"));
    }

    #[test]
    fn test_contributing_clone_url_normalized() {
        let guide = render_contributing(Some("https://github.com/user/repo"));
        assert!(guide.contains("git clone https://github.com/user/repo.git"));

        let guide = render_contributing(Some("https://github.com/user/repo.git"));
        assert!(guide.contains("git clone https://github.com/user/repo.git"));

        // Only one trailing .git is stripped before re-appending
        let guide = render_contributing(Some("https://github.com/user/repo.git.git"));
        assert!(guide.contains("git clone https://github.com/user/repo.git.git"));

        let guide = render_contributing(None);
        assert!(guide.contains(FALLBACK_CLONE_URL));
    }

    #[test]
    fn test_development_setup_matches_labels() {
        let tech = vec!["Rust".to_string(), "Go".to_string()];
        let setup = render_development_setup(&tech);
        assert!(setup.contains("### Rust Setup"));
        assert!(setup.contains("### Go Setup"));
        assert!(!setup.contains("### Python Setup"));

        assert_eq!(render_development_setup(&["Zig".to_string()]), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("api"), "Api");
        assert_eq!(title_case(""), "");
    }
}
