use assert_cmd::Command;
use std::fs;

#[test]
fn binary_runs() {
    let mut cmd = Command::cargo_bin("book-similarity").unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn prints_matrix_and_pairs() {
    let dir = std::env::temp_dir().join(format!("book-similarity-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let first = dir.join("first.txt");
    let second = dir.join("second.txt");
    fs::write(&first, "sea sea whale ship").unwrap();
    fs::write(&second, "sea rose rose rose").unwrap();
    let missing = dir.join("missing.txt");

    let output = Command::cargo_bin("book-similarity")
        .unwrap()
        .args([&first, &second, &missing])
        .output()
        .unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Similarity Matrix:\n\
         0.000 0.250 0.000 \n\
         0.250 0.000 0.000 \n\
         0.000 0.000 0.000 \n\
         \n\
         Top 10 Similar Pairs:\n\
         Books 1 and 2 - Similarity: 0.250\n\
         Books 1 and 3 - Similarity: 0.000\n\
         Books 2 and 3 - Similarity: 0.000\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error opening file"));
    assert!(stderr.contains("missing.txt"));
}

#[test]
fn json_output() {
    let dir = std::env::temp_dir().join(format!("book-similarity-json-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let first = dir.join("first.txt");
    let second = dir.join("second.txt");
    fs::write(&first, "the whale").unwrap();
    fs::write(&second, "whale of the sea").unwrap();

    let output = Command::cargo_bin("book-similarity")
        .unwrap()
        .arg("--json")
        .args(["-p", "1"])
        .args([&first, &second])
        .output()
        .unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["documents"].as_array().unwrap().len(), 2);
    assert_eq!(json["documents"][0]["filename"], "first.txt");
    assert_eq!(json["top_pairs"].as_array().unwrap().len(), 1);
    assert_eq!(json["top_pairs"][0]["similarity"], 0.5);
}

#[test]
fn rejects_bad_arguments() {
    Command::cargo_bin("book-similarity")
        .unwrap()
        .args(["--top-words", "many"])
        .assert()
        .failure();
}
