//! End-to-end generation tests using in-memory sources and a mock enhancer
//!
//! These tests verify the full pipeline (detection, enhancement, assembly)
//! without network access or a real LLM backend.

use readmebuddy::enhance::mock::MockEnhancer;
use readmebuddy::enhance::EnhanceError;
use readmebuddy::source::mock::MockReader;
use readmebuddy::{GenerateError, ProjectInput, ReadmeGenerator};

fn node_api_reader() -> MockReader {
    MockReader::with_files([
        (
            "package.json",
            r#"{
  "name": "my-api",
  "description": "A simple API server.",
  "license": "MIT",
  "scripts": {
    "start": "node src/index.js",
    "test": "jest"
  },
  "dependencies": {
    "express": "^4.18.2"
  }
}"#,
        ),
        ("src/index.js", "const express = require('express');\n"),
        ("README.md", "# old readme\n"),
    ])
}

fn project(name: &str, description: &str, reader: &MockReader) -> ProjectInput {
    ProjectInput {
        name: name.to_string(),
        description: description.to_string(),
        repo_url: Some("https://github.com/user/my-api".to_string()),
        files: reader.file_list(),
    }
}

#[tokio::test]
async fn test_node_api_project_end_to_end() {
    let reader = node_api_reader();
    let enhancer = MockEnhancer::with_text("A fast, minimal HTTP API built on Express.");
    let generator = ReadmeGenerator::new(&enhancer);

    let readme = generator
        .generate(&project("my-api", "A simple API server.", &reader), &reader)
        .await
        .unwrap();

    // Title and enhanced description
    assert!(readme.starts_with("# my-api\n"));
    assert!(readme.contains("A fast, minimal HTTP API built on Express."));

    // Stack detection: express maps to its framework label, which suppresses
    // the generic Node.js label
    assert!(readme.contains("## 🛠️ Tech Stack"));
    assert!(readme.contains("- 🚀 Express.js"));
    assert!(!readme.contains("⬢ Node.js"));

    // Badge row carries the detected framework and the license
    assert!(readme.contains("img.shields.io/badge/-Express.js-blue?logo=expressjs"));

    // Dependencies and run commands
    assert!(readme.contains("## 📦 Key Dependencies"));
    assert!(readme.contains("express: ^4.18.2"));
    assert!(readme.contains("**start**: `npm run start`"));
    assert!(readme.contains("**test**: `npm run test`"));

    // License from the manifest field
    assert!(readme.contains("## 📜 License"));
    assert!(readme.contains("licensed under the MIT License"));
    assert!(readme.contains("license-MIT-green"));

    // Tree includes sources but filters the old README
    assert!(readme.contains("index.js"));
    let structure = readme.split("## 📁 Project Structure").nth(1).unwrap();
    let tree = structure.split("##").next().unwrap();
    assert!(!tree.contains("README.md"));

    // Clone URL is normalized from the repo URL
    assert!(readme.contains("git clone https://github.com/user/my-api.git"));
}

#[tokio::test]
async fn test_enhancer_failure_produces_no_document() {
    let reader = node_api_reader();
    let enhancer = MockEnhancer::new();
    enhancer.add_error(EnhanceError::Api {
        message: "backend unavailable".to_string(),
    });
    let generator = ReadmeGenerator::new(&enhancer);

    let result = generator
        .generate(&project("my-api", "A simple API server.", &reader), &reader)
        .await;

    assert!(matches!(result, Err(GenerateError::Enhance(_))));
}

#[tokio::test]
async fn test_empty_repository_is_rejected() {
    let reader = MockReader::new();
    let enhancer = MockEnhancer::with_text("unused");
    let generator = ReadmeGenerator::new(&enhancer);

    let input = ProjectInput {
        name: "empty".to_string(),
        description: String::new(),
        repo_url: None,
        files: vec![],
    };

    assert!(matches!(
        generator.generate(&input, &reader).await,
        Err(GenerateError::EmptyFileList)
    ));
}

#[tokio::test]
async fn test_node_manifest_outranks_python_manifest() {
    let reader = MockReader::with_files([
        ("package.json", r#"{"dependencies": {"react": "^18.0.0"}}"#),
        ("requirements.txt", "flask==2.0.1\n"),
        ("app.py", ""),
    ]);
    let enhancer = MockEnhancer::with_text("desc");
    let generator = ReadmeGenerator::new(&enhancer);

    let readme = generator
        .generate(&project("mixed", "", &reader), &reader)
        .await
        .unwrap();

    assert!(readme.contains("React"));
    assert!(!readme.contains("- 🐍 Python"));
    // Dependencies come from the winning manifest only
    assert!(readme.contains("react: ^18.0.0"));
    assert!(!readme.contains("flask"));
}

#[tokio::test]
async fn test_rust_project_gets_cargo_commands_and_setup() {
    let reader = MockReader::with_files([
        (
            "Cargo.toml",
            "[package]\nname = \"demo\"\n\n[dependencies]\nserde = \"1.0\"\ntokio = { version = \"1\", features = [\"full\"] }\n",
        ),
        ("src/main.rs", "fn main() {}\n"),
    ]);
    let enhancer = MockEnhancer::with_text("A Rust demo.");
    let generator = ReadmeGenerator::new(&enhancer);

    let readme = generator
        .generate(&project("demo", "", &reader), &reader)
        .await
        .unwrap();

    assert!(readme.contains("- 🦀 Rust"));
    assert!(readme.contains("**Build**: `cargo build`"));
    assert!(readme.contains("**Run**: `cargo run`"));
    assert!(readme.contains("**Test**: `cargo test`"));
    assert!(readme.contains("### Rust Setup"));
    assert!(readme.contains("serde: 1.0"));
}

#[tokio::test]
async fn test_malformed_manifest_degrades_gracefully() {
    let reader = MockReader::with_files([
        ("package.json", "{not valid json"),
        ("src/app.js", ""),
    ]);
    let enhancer = MockEnhancer::with_text("Still generated.");
    let generator = ReadmeGenerator::new(&enhancer);

    // A broken manifest must never abort the run
    let readme = generator
        .generate(&project("broken", "", &reader), &reader)
        .await
        .unwrap();
    assert!(readme.contains("Still generated."));
    assert!(!readme.contains("## 📦 Key Dependencies"));
}

#[tokio::test]
async fn test_features_detected_from_paths_and_dependencies() {
    let reader = MockReader::with_files([
        (
            "package.json",
            r#"{"dependencies": {"express": "^4.0.0"}, "devDependencies": {"jest": "^29.0.0"}}"#,
        ),
        ("app/api/users.ts", ""),
        ("tests/users.test.ts", ""),
    ]);
    let enhancer = MockEnhancer::with_text("desc");
    let generator = ReadmeGenerator::new(&enhancer);

    let readme = generator
        .generate(&project("svc", "", &reader), &reader)
        .await
        .unwrap();

    assert!(readme.contains("## ✨ Features"));
    assert!(readme.contains("🌐 Api"));
    assert!(readme.contains("🧪 Testing"));

    // The enhancer saw the joined feature list
    let calls = enhancer.calls();
    assert!(calls[0].features.contains("api"));
    assert!(calls[0].features.contains("testing"));
}
