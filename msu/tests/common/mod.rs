#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Create a project with the given Cargo.toml content
    pub fn with_manifest(content: &str) -> Self {
        let project = Self::new();
        fs::write(project.manifest_path(), content).expect("Failed to write Cargo.toml");
        project
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("Cargo.toml")
    }

    /// Current Cargo.toml content
    pub fn manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).expect("Failed to read Cargo.toml")
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// crates.io response body for one crate
pub fn crate_body(max_version: &str, versions: &[(&str, bool)]) -> Value {
    let versions: Vec<Value> = versions
        .iter()
        .map(|(num, yanked)| json!({ "num": num, "yanked": yanked }))
        .collect();
    json!({
        "crate": { "max_version": max_version },
        "versions": versions,
    })
}

/// Serve `body` for `GET /api/v1/crates/{name}`, expecting `calls` requests
pub async fn mount_crate(server: &MockServer, name: &str, body: Value, calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/crates/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

/// Answer `GET /api/v1/crates/{name}` with a bare status code
pub async fn mount_status(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/crates/{name}")))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

/// A small manifest touching every line shape the updater cares about
pub fn sample_manifest() -> &'static str {
    r#"[package]
name = "demo"
version = "0.1.0"
edition = "2021"

[dependencies]
# Serialization
serde = { version = "1.0.0", features = ["derive"] }
libc = "0.2.0"
local = { path = "../local" }

[dev-dependencies]
tempfile = "3.0.0"

[profile.release]
opt-level = "3"
"#
}
