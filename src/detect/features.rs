//! Feature keyword detection
//!
//! Additive tagging from two signal classes: path-name conventions and
//! dependency-name substrings. All matching rules apply; the result is an
//! insertion-ordered set.

use crate::source::ContentReader;
use serde_json::Value;
use tracing::warn;

const WEB_DEPS: &[&str] = &["express", "fastify", "koa", "next", "nest"];
const AI_DEPS: &[&str] = &["tensorflow", "brain.js", "pytorch"];
const BLOCKCHAIN_DEPS: &[&str] = &["web3", "ethers"];
const GAME_DEPS: &[&str] = &["phaser", "pixi.js"];

pub async fn detect_features(files: &[String], reader: &dyn ContentReader) -> Vec<String> {
    let mut features = Vec::new();
    let has = |needle: &str| files.iter().any(|f| f.contains(needle));

    if has("api/") {
        add(&mut features, "api");
    }
    if has("database/") || has("db/") {
        add(&mut features, "database");
    }
    if has("auth/") {
        add(&mut features, "auth");
    }
    if has("test/") || has("tests/") {
        add(&mut features, "testing");
    }
    if has("cli/") {
        add(&mut features, "cli");
    }
    if has("src/pages") || has("src/views") || has("app/routes") {
        add(&mut features, "web");
    }

    if let Some(path) = files.iter().find(|f| f.ends_with("package.json")) {
        if let Some(content) = reader.read(path).await {
            match serde_json::from_str::<Value>(&content) {
                Ok(pkg) => {
                    let names = merged_dependency_names(&pkg);
                    let any_contains = |needles: &[&str]| {
                        names
                            .iter()
                            .any(|n| needles.iter().any(|needle| n.contains(needle)))
                    };

                    if any_contains(WEB_DEPS) {
                        add(&mut features, "web");
                    }
                    if names.iter().any(|n| n == "react-native") {
                        add(&mut features, "mobile");
                    }
                    if names.iter().any(|n| n == "electron") {
                        add(&mut features, "desktop");
                    }
                    if any_contains(AI_DEPS) {
                        add(&mut features, "ai");
                    }
                    if any_contains(BLOCKCHAIN_DEPS) {
                        add(&mut features, "blockchain");
                    }
                    if any_contains(GAME_DEPS) {
                        add(&mut features, "game");
                    }
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "failed to parse package.json for features")
                }
            }
        }
    }

    features
}

/// Keys of `dependencies` and `devDependencies`, merged and deduplicated.
fn merged_dependency_names(pkg: &Value) -> Vec<String> {
    let mut names = Vec::new();
    for key in ["dependencies", "devDependencies"] {
        if let Some(map) = pkg.get(key).and_then(Value::as_object) {
            for name in map.keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
    }
    names
}

fn add(features: &mut Vec<String>, keyword: &str) {
    if !features.iter().any(|f| f == keyword) {
        features.push(keyword.to_string());
    }
}
