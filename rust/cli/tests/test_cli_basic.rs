use tripoker_cli::run;

#[test]
fn unknown_command_exits_with_error_and_lists_commands() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["tripoker", "bogus"], &mut out, &mut err);
    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Usage: tripoker <command> [options]"));
    for cmd in ["decide", "classify", "chart", "cfg"] {
        assert!(stderr.contains(cmd), "command list should mention {}", cmd);
    }
}

#[test]
fn no_arguments_exits_with_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["tripoker"], &mut out, &mut err);
    assert_eq!(code, 2);
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["tripoker", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("decide"));
    assert!(err.is_empty());
}

#[test]
fn version_prints_to_stdout_and_exits_zero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["tripoker", "--version"], &mut out, &mut err);
    assert_eq!(code, 0);
}

#[test]
fn classify_reports_category_and_ordinal() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["tripoker", "classify", "--hole", "2C", "2D", "--table", "9S"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert_eq!(stdout.trim(), "Category: Pair (1)");
}

#[test]
fn classify_invalid_token_exits_with_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["tripoker", "classify", "--hole", "XH", "KD", "--table", "QS"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(
        stderr.contains("Invalid card token"),
        "expected card error on stderr, got: {}",
        stderr
    );
    assert!(stderr.contains("XH"));
}

#[test]
fn classify_requires_both_hole_cards() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["tripoker", "classify", "--hole", "AH", "--table", "QS"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2, "one hole card should be rejected");
}
