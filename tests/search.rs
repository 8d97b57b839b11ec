use std::fs;

use assert_cmd::Command;

const DATA: &str = r#"[
    {"title": "Cone snail toxins", "journal": "Journal of Medicinal Chemistry", "year": 2020},
    {"title": "Spider venom peptides", "journal": "Nature", "year": "2021", "volume": "590"},
    {"title": "Scorpion venom", "journal": "Toxicon", "year": "2018"}
]"#;

#[test]
fn search_prints_matching_titles() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("pubs.json");
    fs::write(&data, DATA)?;

    let mut cmd = Command::cargo_bin("pubs")?;
    cmd.env("NO_COLOR", "1");
    let output = cmd.arg("search").arg("Venom").arg("--data").arg(&data).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(strip_ansi_escapes::strip(output.stderr))?;
    let titles: Vec<&str> = stdout.lines().collect();
    assert_eq!(titles, ["Spider venom peptides", "Scorpion venom"]);
    assert!(stderr.contains("✓ 2") && stderr.contains("✗ 1"), "stderr=\n{}", stderr);
    Ok(())
}

#[test]
fn search_matches_journal_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("pubs.json");
    fs::write(&data, DATA)?;

    let mut cmd = Command::cargo_bin("pubs")?;
    cmd.env("NO_COLOR", "1");
    let output = cmd.args(["search", "nature. 590", "--data"]).arg(&data).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Spider venom peptides\n");
    Ok(())
}

#[test]
fn search_without_matches_says_so() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("pubs.json");
    fs::write(&data, DATA)?;

    let mut cmd = Command::cargo_bin("pubs")?;
    cmd.env("NO_COLOR", "1");
    let output = cmd.args(["search", "kinase", "--data"]).arg(&data).output()?;
    assert!(output.status.success());
    let stderr = String::from_utf8(strip_ansi_escapes::strip(output.stderr))?;
    assert!(output.stdout.is_empty());
    assert!(
        stderr.contains("No publications match \"kinase\"")
            && stderr.contains("✓ 0")
            && stderr.contains("✗ 3"),
        "stderr=\n{}",
        stderr
    );
    Ok(())
}

#[test]
fn search_on_failed_load() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("pubs")?;
    cmd.env("NO_COLOR", "1");
    let output = cmd
        .args(["search", "venom", "--data"])
        .arg(dir.path().join("missing.json"))
        .output()?;
    assert!(output.status.success());
    let stderr = String::from_utf8(strip_ansi_escapes::strip(output.stderr))?;
    assert!(output.stdout.is_empty());
    assert!(
        stderr.contains("Error loading publications")
            && stderr.contains("✓ 0")
            && stderr.contains("✗ 0"),
        "stderr=\n{}",
        stderr
    );
    Ok(())
}
