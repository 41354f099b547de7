use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, body, stdout};

#[test]
fn test_custom_keyword_names() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

var (
	a = i18n.T("custom")
	b = gettext.Gettext("default")
)
"#,
    )?;

    let output = test
        .command()
        .args(["--keyword", "i18n.T", "main.go"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#: main.go:4\nmsgid   \"custom\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_skip_args() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nvar a = gettext.Gettext(ctx, \"Skipped ahead\")\n",
    )?;

    let output = test
        .command()
        .args(["--skip-args", "1", "--no-location", "main.go"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "msgid   \"Skipped ahead\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_keyword_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "keywords.json",
        r#"[
  {"type": "singular", "name": "tr.S", "skipArgs": 1},
  {"type": "contextual", "name": "tr.P"}
]"#,
    )?;
    test.write_file(
        "main.go",
        r#"package main

var (
	a = tr.S(lang, "Hello")
	b = tr.P("nav", "Page")
	c = gettext.Gettext("ignored")
)
"#,
    )?;

    let output = test
        .command()
        .args(["--keyword-cfg", "keywords.json", "--no-location", "main.go"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "msgid   \"Hello\"\nmsgstr  \"\"\n\nmsgctxt \"nav\"\nmsgid   \"Page\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}
