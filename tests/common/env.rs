//! Test environment builder for isolated Docent runs.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the docent binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated project and home directories.
///
/// Every run clears the `DOCENT_*` overrides and the default API key
/// variable so the host environment cannot leak into assertions.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    docent_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("failed to create project dir"),
            home_dir: TempDir::new().expect("failed to create home dir"),
            docent_bin: PathBuf::from(env!("CARGO_BIN_EXE_docent")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write test file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.docent_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("OPENAI_API_KEY")
            .env_remove("CI");
        for key in [
            "DOCENT_ENDPOINT",
            "DOCENT_MODEL",
            "DOCENT_DUPLICATES",
            "DOCENT_VERBOSITY",
            "DOCENT_TIMEOUT_SECS",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute docent");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
