use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keyscanrc.json", r#"{ "ignores": ["**/generated/**"] }"#),
        ("en.json", r#"{"greeting": "Hello"}"#),
        ("app.js", "t('greeting')\n"),
        ("generated/bundle.js", "t('vendor.key')\n"),
    ])?;

    assert_cmd_snapshot!(test.scan_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scanning .
      config: ./.keyscanrc.json
      1 resource file(s)
        ./en.json
      1 JavaScript file(s)
        ./app.js
      1 key usage(s) of 1 distinct key(s)

    ✓ Checked 1 source file, 1 resource file - no issues found
    Report written to i18n_report.txt

    ----- stderr -----
    ");
    assert!(!test.read_file("i18n_report.txt")?.contains("vendor.key"));

    Ok(())
}

#[test]
fn test_default_ignores_skip_node_modules() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", r#"{"greeting": "Hello"}"#),
        ("app.js", "t('greeting')\n"),
        ("node_modules/lib/index.js", "t('vendor.key')\n"),
        ("node_modules/lib/package.json", r#"{"name": "lib"}"#),
    ])?;

    run(&mut test.scan_command())?;
    let report = test.read_file("i18n_report.txt")?;

    assert!(!report.contains("vendor.key"));
    assert!(!report.contains("Unused Key: name"));

    Ok(())
}

#[test]
fn test_config_default_locale() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keyscanrc.json", r#"{ "defaultLocale": "de" }"#),
        ("de.json", r#"{"a": "A"}"#),
        ("en.json", r#"{"a": "A"}"#),
        ("app.js", "t('a'); t('b')\n"),
    ])?;

    run(test.scan_command().arg("--fix"))?;

    assert!(test.read_file("i18n_report.txt")?.contains("Add to ./de.json:"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keyscanrc.json", r#"{ "ignores": ["[invalid"] }"#),
        ("app.js", "t('a')\n"),
    ])?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[invalid": Pattern syntax error near position 0: invalid range pattern
    "#);
    assert!(!test.root().join("i18n_report.txt").exists());

    Ok(())
}
