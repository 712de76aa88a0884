//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GEOGRAPHY: &str = r#"{
  "name": "Geography",
  "problems": [
    { "content": "The Earth is round.", "answer": true },
    { "content": "Capital of France?", "answer": 1, "options": ["Lyon", "Paris", "Nice"],
      "analysis": "The capital is {{OPT:2}}." },
    { "content": "Pick the rivers", "answer": [0, 2], "options": ["Nile", "Alps", "Rhine"] },
    { "content": "The {{ANS}} flows through {{ANS}}.", "answer": ["Seine", "Paris"] },
    { "content": "Name the largest ocean.", "answer": "Pacific" }
  ]
}"#;

/// A working directory with a `data/` bank directory, isolated from any
/// user config.
fn workspace(banks: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    for (name, content) in banks {
        std::fs::write(dir.path().join("data").join(name), content).unwrap();
    }
    dir
}

fn bin() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizbank").unwrap()
}

fn quizbank(dir: &TempDir) -> Command {
    let mut cmd = bin();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("QUIZBANK_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn banks_lists_valid_documents() {
    let dir = workspace(&[("geo.json", GEOGRAPHY), ("broken.json", "{ nope")]);

    quizbank(&dir)
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Geography"))
        .stdout(predicate::str::contains("1 bank(s)"))
        .stdout(predicate::str::contains("broken").not());
}

#[test]
fn banks_json_envelope() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(quizbank(&dir).arg("banks").arg("--json"));
    assert_eq!(value["code"], 200);
    assert_eq!(value["data"][0]["id"], "geo");
    assert_eq!(value["data"][0]["count"], 5);
    assert_eq!(value["data"][0]["type_counts"]["essay"], 1);
}

#[test]
fn banks_empty_directory() {
    let dir = workspace(&[]);

    quizbank(&dir)
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No banks found"));
}

#[test]
fn problems_filtered_by_type() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(
        quizbank(&dir)
            .args(["problems", "--bank", "geo", "--mode", "type", "--type", "multiple"])
            .arg("--json"),
    );
    let data = value["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["origin_index"], 2);
    assert_eq!(data[0]["type"], "multiple");
    assert_eq!(data[0]["options"][2], "Rhine");
}

#[test]
fn problems_formats_fill_blanks() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(quizbank(&dir).args(["problems", "--bank", "geo", "--json"]));
    let fill = &value["data"][3];
    let formatted = fill["formatted_content"].as_str().unwrap();
    assert!(formatted.contains(r#"data-index="0""#));
    assert!(formatted.contains(r#"data-index="1""#));
    assert!(!formatted.contains("{{ANS}}"));
}

#[test]
fn problems_text_output_numbers_blanks() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    quizbank(&dir)
        .args(["problems", "--bank", "geo", "--mode", "type", "--type", "fill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[3] (fill) The ____(1) flows through ____(2)."))
        .stdout(predicate::str::contains("{{ANS}}").not())
        .stdout(predicate::str::contains("1 question(s)"));
}

#[test]
fn problems_unmatched_type_is_empty() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(
        quizbank(&dir)
            .args(["problems", "--bank", "geo", "--mode", "type", "--type", "matching"])
            .arg("--json"),
    );
    assert_eq!(value["code"], 200);
    assert_eq!(value["data"], serde_json::json!([]));
}

#[test]
fn problems_shuffle_keeps_every_question() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(quizbank(&dir).args(["problems", "--bank", "geo", "--shuffle", "--json"]));
    let mut origins: Vec<u64> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["origin_index"].as_u64().unwrap())
        .collect();
    origins.sort_unstable();
    assert_eq!(origins, vec![0, 1, 2, 3, 4]);
}

#[test]
fn problems_unknown_bank() {
    let dir = workspace(&[]);

    quizbank(&dir)
        .args(["problems", "--bank", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bank not found: missing"));
}

#[test]
fn check_correct_and_incorrect() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    quizbank(&dir)
        .args(["check", "--bank", "geo", "--index", "2", "--answer", "[2, 0]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));

    quizbank(&dir)
        .args(["check", "--bank", "geo", "--index", "1", "--answer", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains("The capital is Paris."));

    quizbank(&dir)
        .args(["check", "--bank", "geo", "--index", "4", "--answer", "  pacific "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn check_json_envelope() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(quizbank(&dir).args([
        "check",
        "--bank",
        "geo",
        "--index",
        "3",
        "--answer",
        r#"["Paris", "Seine"]"#,
        "--json",
    ]));
    assert_eq!(value["code"], 200);
    assert_eq!(value["data"]["is_correct"], false);
    assert_eq!(value["data"]["type"], "fill");
    assert_eq!(value["data"]["correct_answer"][0], "Seine");
}

#[test]
fn check_out_of_range_index() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    let value = stdout_json(quizbank(&dir).args([
        "check", "--bank", "geo", "--index", "99", "--answer", "true", "--json",
    ]));
    assert_eq!(value["code"], 400);
    assert!(value["msg"].as_str().unwrap().contains("out of range"));

    quizbank(&dir)
        .args(["check", "--bank", "geo", "--index", "99", "--answer", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn check_missing_index() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    quizbank(&dir)
        .args(["check", "--bank", "geo", "--answer", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: origin_index"));
}

#[test]
fn validate_reports_warnings() {
    let dir = workspace(&[
        ("geo.json", GEOGRAPHY),
        (
            "sloppy.json",
            r#"{ "name": "Sloppy", "problems": [ { "content": "one {{ANS}}", "answer": ["a", "b"] } ] }"#,
        ),
    ]);

    quizbank(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank: Geography (5 questions)"))
        .stdout(predicate::str::contains("[0] WARNING: 2 blank(s) expected"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_single_clean_bank() {
    let dir = workspace(&[("geo.json", GEOGRAPHY)]);

    quizbank(&dir)
        .args(["validate", "--bank", "geo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All banks valid."));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    bin()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizbank.toml"))
        .stdout(predicate::str::contains("Created data/example.json"));

    assert!(dir.path().join("quizbank.toml").exists());
    assert!(dir.path().join("data/example.json").exists());

    // The example bank is picked up through the generated config.
    bin()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("QUIZBANK_DATA_DIR")
        .args(["validate", "--bank", "example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Bank"))
        .stdout(predicate::str::contains("All banks valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        bin()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();
    }

    bin()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = workspace(&[]);

    quizbank(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question-bank practice and answer checking"));
}
