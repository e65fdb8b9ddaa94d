//! Configuration layering: defaults, then file, then environment.

use serial_test::serial;
use std::io::Write as _;
use tripoker_cli::run;

fn run_cfg() -> (i32, serde_json::Value) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["tripoker", "cfg"], &mut out, &mut err);
    let display = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, display)
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tripoker.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "pretty = true").unwrap();
    drop(f);

    unsafe {
        std::env::set_var("TRIPOKER_CONFIG", &path);
        std::env::remove_var("TRIPOKER_STRATEGY");
        std::env::remove_var("TRIPOKER_PRETTY");
    }
    let (code, display) = run_cfg();
    unsafe {
        std::env::remove_var("TRIPOKER_CONFIG");
    }

    assert_eq!(code, 0);
    assert_eq!(display["pretty"]["value"], true);
    assert_eq!(display["pretty"]["source"], "file");
    // untouched keys keep their defaults
    assert_eq!(display["strategy"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tripoker.toml");
    std::fs::write(&path, "pretty = true\nstrategy = \"baseline\"\n").unwrap();

    unsafe {
        std::env::set_var("TRIPOKER_CONFIG", &path);
        std::env::set_var("TRIPOKER_PRETTY", "false");
        std::env::remove_var("TRIPOKER_STRATEGY");
    }
    let (code, display) = run_cfg();
    unsafe {
        std::env::remove_var("TRIPOKER_CONFIG");
        std::env::remove_var("TRIPOKER_PRETTY");
    }

    assert_eq!(code, 0);
    assert_eq!(display["pretty"]["value"], false);
    assert_eq!(display["pretty"]["source"], "env");
    assert_eq!(display["strategy"]["source"], "file");
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    unsafe {
        std::env::set_var("TRIPOKER_CONFIG", "/nonexistent/tripoker.toml");
        std::env::remove_var("TRIPOKER_STRATEGY");
        std::env::remove_var("TRIPOKER_PRETTY");
    }
    let (code, _) = run_cfg();
    unsafe {
        std::env::remove_var("TRIPOKER_CONFIG");
    }
    assert_eq!(code, 2);
}
