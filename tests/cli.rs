mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempdir::TempDir;

/// Runs the binary with `stdin` piped in, writing pages into `dir`.
async fn run_piped(base_url: &str, dir: &Path, stdin: &'static str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pokedex-page"));
    command
        .current_dir(dir)
        .env("POKEAPI_BASE_URL", base_url)
        .env("OUTPUT_DIR", dir)
        .env("NO_COLOR", "1")
        .env_remove("HTTP_TIMEOUT_SECONDS")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tokio::task::spawn_blocking(move || {
        let mut child = command.spawn().unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_piped_choice_generates_page() {
    let server = common::serve(common::pichu_routes).await;
    let dir = TempDir::new("pokedex-page").unwrap();

    let output = run_piped(&server.base_url, dir.path(), "1\n").await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("1) Pichu"));
    assert!(stdout.contains("Downloading data for Pichu..."));
    assert!(stdout.contains("File generated:"));
    assert!(dir.path().join("pichu.html").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_piped_non_numeric_choice_writes_nothing() {
    let server = common::serve(common::pichu_routes).await;
    let dir = TempDir::new("pokedex-page").unwrap();

    let output = run_piped(&server.base_url, dir.path(), "abc\n").await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Invalid option 'abc'. Must be 1–4."));
    assert!(!stdout.contains("Downloading"));
    assert!(server.requests().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_stdin_is_invalid_option() {
    let server = common::serve(common::pichu_routes).await;
    let dir = TempDir::new("pokedex-page").unwrap();

    let output = run_piped(&server.base_url, dir.path(), "").await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Invalid option ''. Must be 1–4."));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_out_of_range_flag_exits_cleanly() {
    let dir = TempDir::new("pokedex-page").unwrap();

    let output = tokio::task::spawn_blocking({
        let dir = dir.path().to_path_buf();
        move || {
            Command::new(env!("CARGO_BIN_EXE_pokedex-page"))
                .args(["--choice", "7"])
                .current_dir(&dir)
                .env("OUTPUT_DIR", &dir)
                .env("NO_COLOR", "1")
                .stdin(Stdio::null())
                .output()
                .unwrap()
        }
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid option 7. Must be 1–4."));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
