use assert_cmd::Command;

#[test]
fn shows_help() {
    let mut cmd = Command::cargo_bin("dupdigest").unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn digests_small_and_large_files() {
    let dir = tempfile::tempdir().unwrap();
    let small = dir.path().join("notes.TXT");
    let large = dir.path().join("video.mp4");
    std::fs::write(&small, b"hello").unwrap();
    std::fs::write(&large, vec![7u8; 100_000]).unwrap();

    let out = Command::cargo_bin("dupdigest")
        .unwrap()
        .arg("--json")
        .arg(&small)
        .arg(&large)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["extension"], "txt");
    assert_eq!(rows[0]["strategy"], "full-fast");
    assert!(rows[0]["digest"].as_str().unwrap().starts_with('f'));
    assert_eq!(rows[1]["size"], 100_000);
    assert_eq!(rows[1]["strategy"], "sampled-fast");
    assert!(rows[1]["digest"].as_str().unwrap().starts_with('s'));
}

#[test]
fn thorough_output_matches_library() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("a.bin");
    std::fs::write(&f, vec![1u8; 40_000]).unwrap();

    let out = Command::cargo_bin("dupdigest")
        .unwrap()
        .args(["--json", "--thorough"])
        .arg(&f)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let expected = dupdigest::get_digest(&f, true).unwrap().hash.to_string();
    assert_eq!(v[0]["digest"], expected.as_str());
    assert_eq!(v[0]["strategy"], "full-strong");
}

#[test]
fn directory_argument_fails_but_others_still_print() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("ok.dat");
    std::fs::write(&f, b"data").unwrap();

    let assert = Command::cargo_bin("dupdigest")
        .unwrap()
        .arg(dir.path())
        .arg(&f)
        .assert()
        .failure();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("ok.dat"), "{stdout}");
    assert!(stdout.contains("1 failed"), "{stdout}");
    assert!(stderr.contains("non-regular"), "{stderr}");
}
