use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

#[test]
fn test_fix_suggests_nested_entry() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"greeting": "Hello"}"#),
        ("app.js", "t('greeting'); t('errors.unexpected');\n"),
    ])?;

    let output = run(test.scan_command().arg("--fix"))?;
    assert_eq!(output.status.code(), Some(0));

    let report = test.read_file("i18n_report.txt")?;
    let expected = "   Suggestion to fix:
   Add to ./locales/en.json:
{
    \"errors\": {
        \"unexpected\": \"MISSING: errors.unexpected\"
    }
}
";
    assert!(report.contains(expected), "{}", report);

    Ok(())
}

#[test]
fn test_fix_flat_key() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", r#"{"greeting": "Hello"}"#),
        ("app.py", "_('greeting')\n_('farewell')\n"),
    ])?;

    run(test.scan_command().arg("--fix"))?;

    let report = test.read_file("i18n_report.txt")?;
    assert!(report.contains("{\n    \"farewell\": \"MISSING: farewell\"\n}\n"));

    Ok(())
}

#[test]
fn test_fix_prefers_default_locale_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/de.json", r#"{"greeting": "Hallo"}"#),
        ("locales/en.json", r#"{"greeting": "Hello"}"#),
        ("locales/fr.json", r#"{"greeting": "Bonjour"}"#),
        ("app.js", "t('greeting'); t('nav.home');\n"),
    ])?;

    run(test.scan_command().arg("--fix"))?;
    assert!(test.read_file("i18n_report.txt")?.contains("Add to ./locales/en.json:"));

    run(test.scan_command().args(["--fix", "--default-locale", "fr"]))?;
    assert!(test.read_file("i18n_report.txt")?.contains("Add to ./locales/fr.json:"));

    Ok(())
}

#[test]
fn test_fix_falls_back_to_first_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("i18n/b.json", r#"{"x": "y"}"#),
        ("i18n/a.json", r#"{"#),
        ("app.js", "t('x'); t('z');\n"),
    ])?;

    run(test.scan_command().arg("--fix"))?;

    // a.json does not parse, so b.json is the first candidate
    assert!(test.read_file("i18n_report.txt")?.contains("Add to ./i18n/b.json:"));

    Ok(())
}

#[test]
fn test_console_points_to_target() -> Result<()> {
    let test = CliTest::with_files(&[("en.json", r#"{}"#), ("app.js", "t('a.b')\n")])?;

    assert_cmd_snapshot!(test.scan_command().arg("--fix"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "a.b"  missing-key
      --> ./app.js:1:4
      |
    1 | t('a.b')
      |    ^
      = help: add to ./en.json

    ✘ 1 problems (1 missing key, 0 unused keys)
    Report written to i18n_report.txt

    ----- stderr -----
    "#);

    Ok(())
}
