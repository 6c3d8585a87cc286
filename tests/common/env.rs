//! Test environment builder for isolated Brigade CLI testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Brigade CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
            .collect()
    }
}

/// Run the brigade binary from `cwd` with a plain, colorless terminal.
pub fn run_brigade(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brigade"));
    cmd.current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env("LANG", "C")
        .env_remove("LC_ALL")
        .env_remove("LC_CTYPE")
        .env_remove("BRIGADE_FORMAT")
        .env_remove("BRIGADE_COLOR")
        .env_remove("BRIGADE_SOURCE_ROOT");

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute brigade");
    output_to_result(output)
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Path of the bundled sample project
pub fn bistro_demo() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/bistro")
}

/// Isolated project directory.
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run brigade from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        run_brigade(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_brigade(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, relative: &str, args: &[&str]) -> TestResult {
        run_brigade(&self.project_path(relative), args, &[])
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    manifest: Option<String>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            manifest: None,
            files: Vec::new(),
        }
    }

    /// Set brigade.toml content
    pub fn with_manifest(mut self, toml: &str) -> Self {
        self.manifest = Some(toml.to_string());
        self
    }

    /// Add a file relative to the project root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let env = TestEnv { project_root };

        if let Some(manifest) = &self.manifest {
            env.write_file("brigade.toml", manifest);
        }
        for (relative, content) in &self.files {
            env.write_file(relative, content);
        }
        env
    }
}
