// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::process::{Command, Stdio};

/// Run the demo binary with the given arguments, stdio fully piped.
///
/// Piped stdio means neither stream is an interactive terminal, so these
/// tests always exercise the plain-output path.
pub fn run_logtint(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_logtint"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run logtint");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
