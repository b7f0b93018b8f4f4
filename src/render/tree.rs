//! Directory-tree rendering
//!
//! Builds a conventional `tree`-style text block from a flat path list.
//! Build artifacts, lockfiles, and dotfiles are filtered out first; a
//! common root segment (present for local folder selections) is stripped
//! and used as the printed root label. Output is deterministic: siblings
//! are sorted lexicographically at every level.

use std::collections::BTreeMap;

const IGNORED_DIRS: &[&str] = &[
    ".venv",
    "__pycache__",
    "node_modules",
    "vendor",
    ".git",
    ".github",
    ".vscode",
    ".idea",
    "dist",
    "build",
    "bin",
    "obj",
    "out",
    "coverage",
    "logs",
    "temp",
    "android",
    "ios",
    ".gradle",
    "Pods",
    "Carthage",
    ".dart_tool",
];

const IGNORED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    ".env",
    ".env.local",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
    "README.md",
];

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

/// Renders the filtered path list as a fenced code block.
pub fn render_tree(files: &[String]) -> String {
    let filtered: Vec<&String> = files.iter().filter(|p| !is_ignored(p)).collect();

    let root = common_root(&filtered);

    let mut tree = TreeNode::default();
    for path in &filtered {
        let stripped = match &root {
            Some(r) if path.len() > r.len() + 1 => &path[r.len() + 1..],
            _ => path.as_str(),
        };
        let mut node = &mut tree;
        for part in stripped.split('/').filter(|p| !p.is_empty()) {
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    let mut out = String::from("```\n");
    out.push_str(root.as_deref().unwrap_or("."));
    out.push('\n');
    render_level(&tree, "", &mut out);
    out.push_str("```");
    out
}

fn is_ignored(path: &str) -> bool {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.iter().any(|p| IGNORED_DIRS.contains(p)) {
        return true;
    }
    let file_name = parts.last().copied().unwrap_or(path);
    IGNORED_FILES.contains(&file_name)
        || file_name.contains(".min.")
        || file_name.ends_with(".log")
        || file_name.ends_with(".tmp")
        || file_name.ends_with(".bak")
        || file_name.ends_with(".swp")
        || file_name.starts_with('.')
}

/// First path segment shared by every path, if any. Local folder selections
/// have one; hosted-repo listings usually do not.
fn common_root(files: &[&String]) -> Option<String> {
    let first = files.first()?;
    let (candidate, _) = first.split_once('/')?;
    let prefix = format!("{}/", candidate);
    if files.iter().all(|p| p.starts_with(&prefix)) {
        Some(candidate.to_string())
    } else {
        None
    }
}

fn render_level(node: &TreeNode, indent: &str, out: &mut String) {
    let last_index = node.children.len().saturating_sub(1);
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == last_index;
        out.push_str(indent);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');
        if !child.children.is_empty() {
            let next = format!("{}{}", indent, if is_last { "    " } else { "│   " });
            render_level(child, &next, out);
        }
    }
}
