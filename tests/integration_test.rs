use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn stickies_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stickies"));
    cmd.current_dir(tmp.path()).env_remove("STICKIES_FILE");
    cmd
}

fn run(tmp: &TempDir, args: &[&str]) -> Output {
    stickies_cmd(tmp).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stored_notes(tmp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(tmp.path().join("notes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_list_without_notes_file() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["list"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No notes found."));
    assert!(!tmp.path().join("notes.json").exists());
}

#[test]
fn test_add_creates_notes_file() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["add", "Shop", "--body", "milk, eggs"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created note 0 - Shop"));
    assert_eq!(
        stored_notes(&tmp),
        serde_json::json!([{"title": "Shop", "body": "milk, eggs"}])
    );
}

#[test]
fn test_add_reads_body_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let tmp = TempDir::new().unwrap();

    let mut child = stickies_cmd(&tmp)
        .args(["add", "Piped", "--stdin"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from stdin")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stored_notes(&tmp),
        serde_json::json!([{"title": "Piped", "body": "from stdin"}])
    );
}

#[test]
fn test_legacy_file_is_normalized() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("notes.json"),
        r#"["Hello", {"title":"Shop","body":"milk, eggs"}]"#,
    )
    .unwrap();

    let output = run(&tmp, &["list", "--json"]);

    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        listed,
        serde_json::json!([
            {"title": "Hello", "body": ""},
            {"title": "Shop", "body": "milk, eggs"}
        ])
    );
}

#[test]
fn test_corrupt_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.json"), "{not json").unwrap();

    let output = run(&tmp, &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("is corrupt"));
}

#[test]
fn test_full_note_workflow() {
    let tmp = TempDir::new().unwrap();

    for (title, body) in [("one", "first"), ("two", "second"), ("three", "third")] {
        let output = run(&tmp, &["add", title, "--body", body]);
        assert!(output.status.success());
    }

    // Edit keeps the fields that were not given
    let output = run(&tmp, &["edit", "1", "--title", "TWO"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Updated note 1 - TWO"));

    let output = run(&tmp, &["show", "1", "--json"]);
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown, serde_json::json!({"title": "TWO", "body": "second"}));

    // Delete shifts later notes down
    let output = run(&tmp, &["delete", "0", "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted note 0 - one"));

    assert_eq!(
        stored_notes(&tmp),
        serde_json::json!([
            {"title": "TWO", "body": "second"},
            {"title": "three", "body": "third"}
        ])
    );

    let output = run(&tmp, &["list"]);
    let out = stdout(&output);
    assert!(out.contains("0  TWO"));
    assert!(out.contains("1  three"));
}

#[test]
fn test_delete_non_interactive_requires_force() {
    let tmp = TempDir::new().unwrap();
    run(&tmp, &["add", "keep me"]);

    let output = stickies_cmd(&tmp)
        .args(["delete", "0"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert_eq!(
        stored_notes(&tmp),
        serde_json::json!([{"title": "keep me", "body": ""}])
    );
}

#[test]
fn test_missing_index_fails() {
    let tmp = TempDir::new().unwrap();
    run(&tmp, &["add", "only"]);

    let cases: [&[&str]; 3] = [
        &["show", "3"],
        &["edit", "3", "--title", "x"],
        &["delete", "3", "--force"],
    ];
    for args in cases {
        let output = run(&tmp, args);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("No note at index 3"));
    }
}

#[test]
fn test_file_flag_and_env_var() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["--file", "board.json", "add", "flagged"]);
    assert!(output.status.success());
    assert!(tmp.path().join("board.json").exists());

    let output = stickies_cmd(&tmp)
        .env("STICKIES_FILE", "board.json")
        .args(["list", "--json"])
        .output()
        .unwrap();
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listed, serde_json::json!([{"title": "flagged", "body": ""}]));

    assert!(!tmp.path().join("notes.json").exists());
}
