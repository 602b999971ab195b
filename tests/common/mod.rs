use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Fixed "today" so calendar and slot output stay stable.
pub const TODAY: &str = "2026-10-18";

/// Script lines that walk a booking up to the contact step.
#[allow(dead_code)]
pub const TO_CONTACT: &[&str] = &[
    "service 1",
    "provider 1",
    "next",
    "date 19",
    "time 10:00",
    "next",
];

pub struct CliOutput {
    pub stdout: String,
    #[allow(dead_code)]
    pub stderr: String,
}

/// Runs the shell in script mode against an isolated home directory.
pub struct ScriptHarness {
    home: TempDir,
}

impl ScriptHarness {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    #[allow(dead_code)]
    pub fn write_config(&self, json: &str) {
        let dir = self.home().join("config");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.json"), json).expect("write config");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("booking_wizard_cli").expect("binary exists");
        cmd.env("BOOKING_WIZARD_CLI_SCRIPT", "1")
            .env("BOOKING_WIZARD_HOME", self.home())
            .env("BOOKING_WIZARD_TODAY", TODAY)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, lines: &[&str]) -> CliOutput {
        let mut input = lines.join("\n");
        input.push('\n');
        let output = self
            .command()
            .write_stdin(input)
            .output()
            .expect("run script");
        if !output.status.success() {
            panic!(
                "script failed: status={}\nstdout:\n{}\nstderr:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
