//! Process-level startup failure tests.
//!
//! These run the built binary and check that fatal startup errors are
//! reported on stderr with a non-zero exit status.

use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_microservice-a");

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run microservice-a")
}

#[test]
fn exits_nonzero_when_port_is_taken() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();

    let output = run(&["--host", "127.0.0.1", "--port", &port]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to bind"), "stderr: {stderr}");
    assert!(stderr.contains(&format!("127.0.0.1:{port}")), "stderr: {stderr}");
    drop(taken);
}

#[test]
fn exits_nonzero_on_malformed_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[http\nport = 5000\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run(&["--config", path.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"), "stderr: {stderr}");
}

#[test]
fn exits_nonzero_on_missing_config() {
    let output = run(&["--config", "/nonexistent/microservice-a.toml"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"), "stderr: {stderr}");
}

#[test]
fn exits_nonzero_on_invalid_port() {
    let output = run(&["--port", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http.port"), "stderr: {stderr}");
}
