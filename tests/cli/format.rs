use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

fn scenario() -> Result<CliTest> {
    CliTest::with_files(&[
        ("en.json", r#"{"greeting": "Hello", "user": {"name": "N"}}"#),
        ("app.ts", "t('greeting');\nt('user.<email>');\n"),
    ])
}

#[test]
fn test_html_report() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.scan_command().args(["--format", "html", "--fix"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "user.<email>"  missing-key
      --> ./app.ts:2:4
      |
    2 | t('user.<email>');
      |    ^
      = help: add to ./en.json

    warning: "user.name"  unused-key
      --> ./en.json:1

    ✘ 2 problems (1 missing key, 1 unused key)
    Report written to i18n_report.html

    ----- stderr -----
    "#);

    let html = test.read_file("i18n_report.html")?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<td class=\"key-path\">user.&lt;email&gt;</td>"));
    assert!(html.contains("<span class=\"language-tag\">TypeScript</span>"));
    assert!(html.contains("<td class=\"key-path\">user.name</td>"));
    assert!(html.contains("Suggestions to Fix Missing Keys"));
    assert!(!html.contains("<email>"));

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let test = scenario()?;

    run(test.scan_command().args(["--format", "json"]))?;

    let report: Value = serde_json::from_str(&test.read_file("i18n_report.json")?)?;
    assert_eq!(report["fixMode"], false);
    assert_eq!(report["stats"]["sourceFiles"], 1);
    assert_eq!(report["stats"]["resourceFiles"], 1);
    assert_eq!(report["missing"][0]["key"], "user.<email>");
    assert_eq!(report["missing"][0]["occurrences"][0]["line"], 2);
    assert_eq!(
        report["missing"][0]["occurrences"][0]["language"],
        "TypeScript"
    );
    assert_eq!(report["unused"][0]["key"], "user.name");
    assert_eq!(report["unused"][0]["kind"], "leaf");
    assert_eq!(report["unused"][0]["declarations"][0]["locale"], "en");

    Ok(())
}

#[test]
fn test_json_report_is_not_rescanned() -> Result<()> {
    let test = scenario()?;

    run(test.scan_command().args(["--format", "json"]))?;
    let first = test.read_file("i18n_report.json")?;
    run(test.scan_command().args(["--format", "json"]))?;
    let second = test.read_file("i18n_report.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_earlier_json_report_is_not_a_resource() -> Result<()> {
    let test = scenario()?;

    run(test.scan_command().args(["--format", "json"]))?;
    assert!(test.root().join("i18n_report.json").exists());

    assert_cmd_snapshot!(test.scan_command().args(["--format", "txt"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "user.<email>"  missing-key
      --> ./app.ts:2:4
      |
    2 | t('user.<email>');
      |    ^

    warning: "user.name"  unused-key
      --> ./en.json:1

    ✘ 2 problems (1 missing key, 1 unused key)
    Report written to i18n_report.txt

    ----- stderr -----
    "#);

    let report = test.read_file("i18n_report.txt")?;
    assert!(
        report.contains("Files: 1 source, 1 resource\n"),
        "{}",
        report
    );
    assert!(!report.contains("fixMode"));

    Ok(())
}

#[test]
fn test_custom_output_path() -> Result<()> {
    let test = scenario()?;

    let output = run(test.scan_command().args(["--output", "out/keys.txt"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file("out/keys.txt")?.contains("i18n INTERNATIONALIZATION REPORT"));
    assert!(!test.root().join("i18n_report.txt").exists());

    Ok(())
}
