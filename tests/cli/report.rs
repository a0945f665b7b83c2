use std::{io::Write, process::Stdio};

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, file_diff};

fn two_file_diff() -> String {
    [
        file_diff(
            "app/locales/Messages_fr_FR.json",
            r#"@@ -2,2 +2,3 @@
-  "greeting.hello": "Salut",
-  "errors.notFound": "Introuvable"
+  "greeting.hello": "Bonjour",
+  "errors.notFound": "Page introuvable",
+  "errors.retry": "Réessayer"
"#,
        ),
        file_diff(
            "app/locales/Messages_en_US.json",
            r#"@@ -2 +2 @@
-  "greeting.hello": "Hi",
+  "greeting.hello": "Hello",
"#,
        ),
        file_diff(
            "lib/widgets/locales/Messages_fr_FR.json",
            r#"@@ -4 +4,2 @@
-  "widget.close": "Fermer"
+  "widget.close": "Fermer",
+  "widget.title": "Titre"
"#,
        ),
    ]
    .concat()
}

#[test]
fn test_report_to_stdout() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;

    assert_cmd_snapshot!(test.report_command("changes.diff"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - app/locales/Messages_fr_FR.json:
      - greeting.hello
      - errors.notFound
      - errors.retry
    - lib/widgets/locales/Messages_fr_FR.json:
      - widget.title

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_report_is_stable_across_runs() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;

    let first = test.report_command("changes.diff").output()?;
    let second = test.report_command("changes.diff").output()?;
    assert_eq!(
        String::from_utf8_lossy(&first.stdout),
        String::from_utf8_lossy(&second.stdout)
    );

    Ok(())
}

#[test]
fn test_unchanged_values_only() -> Result<()> {
    let test = CliTest::with_file(
        "changes.diff",
        &file_diff(
            "a/Messages_fr_FR.json",
            r#"@@ -3 +3 @@
- "bye": "Salut"
+ "bye": "Salut",
"#,
        ),
    )?;

    assert_cmd_snapshot!(test.report_command("changes.diff"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ No changed translation keys found
    ");

    Ok(())
}

#[test]
fn test_report_to_output_file() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;

    assert_cmd_snapshot!(
        test.report_command("changes.diff").arg("--output").arg("develop.yaml"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created develop.yaml (4 keys in 2 files)

    ----- stderr -----
    "
    );

    assert_eq!(
        test.read_file("develop.yaml")?,
        "- app/locales/Messages_fr_FR.json:\n  - greeting.hello\n  - errors.notFound\n  - errors.retry\n- lib/widgets/locales/Messages_fr_FR.json:\n  - widget.title\n"
    );

    Ok(())
}

#[test]
fn test_locale_file_flag() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;

    assert_cmd_snapshot!(
        test.report_command("changes.diff").arg("--locale-file").arg("Messages_en_US.json"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - app/locales/Messages_en_US.json:
      - greeting.hello

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_locale_file_from_config() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;
    test.write_file(
        ".transdiffrc.json",
        r#"{ "localeFile": "Messages_en_US.json" }"#,
    )?;

    let output = test.report_command("changes.diff").output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "- app/locales/Messages_en_US.json:\n  - greeting.hello\n"
    );

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("changes.diff", &two_file_diff())?;
    test.write_file(".transdiffrc.json", r#"{ "localeFile": "" }"#)?;

    let output = test.report_command("changes.diff").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config file"), "stderr: {}", stderr);
    assert!(stderr.contains("must not be empty"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_verbose_diagnostics() -> Result<()> {
    let test = CliTest::with_file(
        "changes.diff",
        &[
            file_diff(
                "app/Messages_fr_FR.json",
                r#"@@ -2,2 +2,4 @@
-  "bye": "Salut"
+  "bye": "Salut",
+  "hello": "Bonjour",
+  "section": {
+    "title": "Titre"
"#,
            ),
            file_diff(
                "app/Messages_en_US.json",
                "@@ -1,0 +2 @@\n+  \"hello\": \"Hello\"\n",
            ),
        ]
        .concat(),
    )?;

    assert_cmd_snapshot!(test.report_command("changes.diff").arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - app/Messages_fr_FR.json:
      - hello
      - title

    ----- stderr -----
    info: locale file Messages_fr_FR.json
    info: scanned 2 file blocks, 1 not matching Messages_fr_FR.json
    warning: app/Messages_fr_FR.json section (added value is not a single-line string)
    skipped: app/Messages_fr_FR.json bye (value unchanged)
    ");

    Ok(())
}

#[test]
fn test_unparseable_warning() -> Result<()> {
    let test = CliTest::with_file(
        "changes.diff",
        &file_diff(
            "Messages_fr_FR.json",
            "@@ -1,0 +2,2 @@\n+  \"count\": 3,\n+  \"label\": \"Libellé\"\n",
        ),
    )?;

    assert_cmd_snapshot!(test.report_command("changes.diff"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - Messages_fr_FR.json:
      - label

    ----- stderr -----
    warning: 1 key(s) could not be parsed (use -v for details)
    ");

    Ok(())
}

#[test]
fn test_missing_diff_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.report_command("missing.diff").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error: Failed to read diff file: missing.diff"),
        "stderr: {}",
        stderr
    );

    Ok(())
}

#[test]
fn test_diff_from_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let mut child = test
        .command()
        .arg("report")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(two_file_diff().as_bytes())?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "- app/locales/Messages_fr_FR.json:\n  - greeting.hello\n  - errors.notFound\n  - errors.retry\n- lib/widgets/locales/Messages_fr_FR.json:\n  - widget.title\n"
    );

    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let test = CliTest::with_file("changes.diff", "")?;

    let output = test.report_command("changes.diff").output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
