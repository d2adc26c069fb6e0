use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const SCENARIO_RESOURCE: &str = r#"{"greeting": "Hello", "user": {"name": "N"}}"#;
const SCENARIO_SOURCE: &str = "const a = t('greeting');\nconst b = t('user.email');\n";

#[test]
fn test_missing_and_unused_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", SCENARIO_RESOURCE),
        ("src/app.js", SCENARIO_SOURCE),
    ])?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "user.email"  missing-key
      --> ./src/app.js:2:14
      |
    2 | const b = t('user.email');
      |              ^

    warning: "user.name"  unused-key
      --> ./locales/en.json:1

    ✘ 2 problems (1 missing key, 1 unused key)
    Report written to i18n_report.txt

    ----- stderr -----
    "#);

    let report = test.read_file("i18n_report.txt")?;
    assert!(report.contains("❌ Missing Key: user.email\n"));
    assert!(report.contains("   - ./src/app.js:2:14 -> const b = t('user.email');\n"));
    assert!(report.contains("⚠️ Unused Key: user.name\n"));
    assert!(report.contains("   - ./locales/en.json:1 (en)\n"));
    assert!(!report.contains("Unused Key: user\n"));
    assert!(!report.contains("Unused Key: greeting\n"));

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", r#"{"nav": {"home": "Home"}}"#),
        ("app.py", "print(_('nav.home'))\n"),
    ])?;

    assert_cmd_snapshot!(test.scan_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file, 1 resource file - no issues found
    Report written to i18n_report.txt

    ----- stderr -----
    ");

    let report = test.read_file("i18n_report.txt")?;
    assert!(report.contains("✅ No missing keys found!"));
    assert!(report.contains("✅ No unused keys found!"));

    Ok(())
}

#[test]
fn test_absolute_scan_root() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", r#"{"greeting": "Hello"}"#),
        ("app.py", "print(_('greeting'))\nprint(_('farewell'))\n"),
    ])?;

    let temp_dir = test.temp_dir_filter();
    insta::with_settings!({filters => vec![(temp_dir.as_str(), "[TEMP_DIR]")]}, {
        assert_cmd_snapshot!(test.command().arg("--scan").arg(test.root()).arg("-v"), @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        Scanning [TEMP_DIR]
          config: (defaults)
          1 resource file(s)
            [TEMP_DIR]/en.json
          1 Python file(s)
            [TEMP_DIR]/app.py
          2 key usage(s) of 2 distinct key(s)

        error: "farewell"  missing-key
          --> [TEMP_DIR]/app.py:2:10
          |
        2 | print(_('farewell'))
          |          ^

        ✘ 1 problems (1 missing key, 0 unused keys)
        Report written to i18n_report.txt

        ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_all_dialects() -> Result<()> {
    let test = CliTest::with_files(&[
        ("app.py", "label = gettext('py.key')\n"),
        ("main.ts", "const s = t.rich('ts.key');\n"),
        ("legacy.js", "this.$t('js.key')\n"),
        ("App.vue", "<p>{{ $t('vue.key') }}</p>\n<script>i18n.t('vue.other')</script>\n"),
    ])?;

    run(&mut test.scan_command())?;
    let report = test.read_file("i18n_report.txt")?;

    for key in ["js.key", "py.key", "ts.key", "vue.key", "vue.other"] {
        assert!(
            report.contains(&format!("❌ Missing Key: {}\n", key)),
            "{} not reported:\n{}",
            key,
            report
        );
    }

    Ok(())
}

#[test]
fn test_missing_scan_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["--scan", "does-not-exist"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Directory 'does-not-exist' does not exist
    ");
    assert!(!test.root().join("i18n_report.txt").exists());

    Ok(())
}

#[test]
fn test_scan_root_is_file() -> Result<()> {
    let test = CliTest::with_files(&[("app.py", "")])?;

    assert_cmd_snapshot!(test.command().args(["--scan", "app.py"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'app.py' is not a directory
    ");

    Ok(())
}

#[test]
fn test_strict_fails_on_missing_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", SCENARIO_RESOURCE),
        ("app.js", SCENARIO_SOURCE),
    ])?;

    assert_cmd_snapshot!(test.scan_command().arg("--strict"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "user.email"  missing-key
      --> ./app.js:2:14
      |
    2 | const b = t('user.email');
      |              ^

    warning: "user.name"  unused-key
      --> ./en.json:1

    ✘ 2 problems (1 missing key, 1 unused key)
    Report written to i18n_report.txt

    ----- stderr -----
    "#);

    // Unused keys alone never fail the run
    test.write_file("app.js", "t('greeting'); t('user.name');\n")?;
    test.write_file("extra.json", r#"{"legacy": "x"}"#)?;
    assert_cmd_snapshot!(test.scan_command().arg("--strict"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "legacy"  unused-key
      --> ./extra.json:1

    ✘ 1 problems (0 missing keys, 1 unused key)
    Report written to i18n_report.txt

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_broken_resource_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"greeting": "Hello"}"#),
        ("locales/fr.json", r#"{"greeting": "Bonjour", "farewell": "#),
        ("app.py", "_('greeting')\n_('farewell')\n"),
    ])?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "farewell"  missing-key
      --> ./app.py:2:4
      |
    2 | _('farewell')
      |    ^

    ✘ 1 problems (1 missing key, 0 unused keys)
    Report written to i18n_report.txt

    ----- stderr -----
    warning: skipped ./locales/fr.json  resource-parse
      = note: Failed to parse resource file: ./locales/fr.json: Invalid JSON: EOF while parsing a value at line 1 column 36
    "#);

    let report = test.read_file("i18n_report.txt")?;
    assert!(report.contains("❌ Missing Key: farewell\n"));
    assert!(report.contains("SKIPPED FILES"));
    assert!(report.contains("./locales/fr.json [resource-parse]"));

    Ok(())
}

#[test]
fn test_no_resource_files() -> Result<()> {
    let test = CliTest::with_files(&[("app.js", "t('a.b')\n")])?;

    let output = run(test.scan_command().arg("--fix"))?;

    assert_eq!(output.status.code(), Some(0));
    let report = test.read_file("i18n_report.txt")?;
    assert!(report.contains("❌ Missing Key: a.b\n"));
    assert!(!report.contains("Suggestion to fix"));

    Ok(())
}

#[test]
fn test_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("en.json", r#"{"a": "b"}"#),
        ("src/app.ts", "t('a')\n"),
        ("src/App.vue", "$t('a')\n"),
    ])?;

    assert_cmd_snapshot!(test.scan_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scanning .
      config: (defaults)
      1 resource file(s)
        ./en.json
      1 Vue file(s)
        ./src/App.vue
      1 TypeScript file(s)
        ./src/app.ts
      2 key usage(s) of 1 distinct key(s)

    ✓ Checked 2 source files, 1 resource file - no issues found
    Report written to i18n_report.txt

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_reports_are_reproducible() -> Result<()> {
    let test = CliTest::with_files(&[
        ("b/fr/messages.json", r#"{"greeting": "Salut", "legal": {"terms": "T"}}"#),
        ("a/en.json", r#"{"greeting": "Hi"}"#),
        ("z/app.js", "t('greeting'); t('checkout.total')\n"),
        ("c/app.py", "_('checkout.total')\n"),
    ])?;

    run(test.scan_command().arg("--fix"))?;
    let first = test.read_file("i18n_report.txt")?;
    run(test.scan_command().arg("--fix"))?;
    let second = test.read_file("i18n_report.txt")?;

    assert_eq!(first, second);

    // Occurrences follow discovery order: c/ before z/
    let c = first.find("./c/app.py:1").unwrap();
    let z = first.find("./z/app.js:1").unwrap();
    assert!(c < z);

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--version"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    keyscan 0.1.0

    ----- stderr -----
    ");

    Ok(())
}
