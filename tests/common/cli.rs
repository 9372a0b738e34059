//! Runs the compiled termtint binary.

use std::process::Command;

/// Captured result of one binary invocation.
pub struct CliOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Run termtint with `args` and no config file in the environment.
pub fn run(args: &[&str]) -> CliOutput {
    run_with_env(args, &[])
}

/// Run termtint with `args` and extra environment variables.
pub fn run_with_env(args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let mut command = Command::new(env!("CARGO_BIN_EXE_termtint"));
    command
        .args(args)
        .env_remove("TERMTINT_CONFIG")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }

    let output = command.output().expect("Failed to run termtint binary");
    CliOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
