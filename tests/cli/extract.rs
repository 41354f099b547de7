use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, body, stderr, stdout};

#[test]
fn test_comment_attached_to_call() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

import "gettext"

func main() {
	// i18n: greeting
	gettext.Gettext("Hello")
}
"#,
    )?;

    let output = test
        .command()
        .args(["--add-comments-tag", "i18n", "main.go"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#. i18n: greeting\n#: main.go:7\nmsgid   \"Hello\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_plural_with_format_hint() -> Result<()> {
    let test = CliTest::with_file(
        "cart.go",
        r#"package main

func show(n int) {
	gettext.NGettext("%d item", "%d items", n)
}
"#,
    )?;

    let output = test.command().arg("cart.go").output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#: cart.go:4\n#, c-format\nmsgid   \"%d item\"\nmsgid_plural   \"%d items\"\nmsgstr[0]  \"\"\nmsgstr[1]  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_contextual_call() -> Result<()> {
    let test = CliTest::with_file(
        "menu.go",
        r#"package main

var open = gettext.NCGettext("menu", "Open")
"#,
    )?;

    let output = test.command().arg("menu.go").output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#: menu.go:3\nmsgctxt \"menu\"\nmsgid   \"Open\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_duplicates_across_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "a.go",
        "package main\n\nvar a = gettext.Gettext(\"Save\")\n",
    )?;
    test.write_file(
        "b.go",
        "package main\n\nvar x = 1\n\nvar b = gettext.Gettext(\"Save\")\n",
    )?;

    let output = test.command().args(["a.go", "b.go"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#: a.go:3 b.go:5\nmsgid   \"Save\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_sorted_output_without_locations() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

var (
	b = gettext.Gettext("b")
	a = gettext.Gettext("a")
)
"#,
    )?;

    let unsorted = test.command().arg("main.go").output()?;
    let unsorted = stdout(&unsorted);
    let unsorted = body(&unsorted);
    assert!(unsorted.find("\"b\"").unwrap() < unsorted.find("\"a\"").unwrap());

    let sorted = test
        .command()
        .args(["--sort-output", "--no-location", "main.go"])
        .output()?;
    assert_eq!(
        body(&stdout(&sorted)),
        "msgid   \"a\"\nmsgstr  \"\"\n\nmsgid   \"b\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_header_fields() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n")?;

    let output = test
        .command()
        .args([
            "--package-name",
            "demo",
            "--msgid-bugs-address",
            "bugs@example.com",
            "main.go",
        ])
        .output()?;

    let pot = stdout(&output);
    assert!(output.status.success());
    assert!(pot.starts_with("# SOME DESCRIPTIVE TITLE.\n"));
    assert!(pot.contains("msgstr  \"Project-Id-Version: demo\\n\"\n"));
    assert!(pot.contains("        \"Report-Msgid-Bugs-To: bugs@example.com\\n\"\n"));
    assert!(pot.contains("        \"POT-Creation-Date: "));
    assert!(pot.ends_with(crate::HEADER_END));

    Ok(())
}

#[test]
fn test_add_comments_without_tag() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

func main() {
	// first line
	// second line
	gettext.Gettext("Quit")

	gettext.Gettext("Stay")
}
"#,
    )?;

    let plain = test.command().arg("main.go").output()?;
    assert!(!stdout(&plain).contains("#. "));

    let output = test.command().args(["--add-comments", "main.go"]).output()?;
    assert_eq!(
        body(&stdout(&output)),
        "#. first line\n#. second line\n#: main.go:6\nmsgid   \"Quit\"\nmsgstr  \"\"\n\n#: main.go:8\nmsgid   \"Stay\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_write_to_output_file() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nvar x = gettext.Gettext(\"Hello\")\n",
    )?;

    let output = test
        .command()
        .args(["-o", "messages.pot", "main.go"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    let pot = test.read_file("messages.pot")?;
    assert_eq!(
        body(&pot),
        "#: main.go:3\nmsgid   \"Hello\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_unresolvable_argument_warns() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

func main() {
	gettext.Gettext(name)
	gettext.Gettext("Kept")
}
"#,
    )?;

    let output = test.command().arg("main.go").output()?;

    assert!(output.status.success());
    let warnings = stderr(&output);
    assert!(warnings.contains("warning: unable to obtain value"));
    assert!(warnings.contains("--> main.go:4:"));
    assert!(warnings.contains("in call to gettext.Gettext"));
    assert_eq!(
        body(&stdout(&output)),
        "#: main.go:5\nmsgid   \"Kept\"\nmsgstr  \"\"\n\n"
    );

    let quiet = test.command().args(["--quiet", "main.go"]).output()?;
    assert!(quiet.status.success());
    assert_eq!(stderr(&quiet), "");

    Ok(())
}

#[test]
fn test_concatenated_and_raw_strings() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nvar a = gettext.Gettext(\"Hello, \" + \"world\")\nvar b = gettext.Gettext(`say \"hi\"\nnow`)\n",
    )?;

    let output = test.command().args(["--no-location", "main.go"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "msgid   \"Hello, world\"\nmsgstr  \"\"\n\nmsgid   \"say \\\"hi\\\"\\n\"\n        \"now\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_script_source() -> Result<()> {
    let test = CliTest::with_file(
        "app.ts",
        r#"// i18n: button label
const label: string = gettext.Gettext('Submit');
"#,
    )?;

    let output = test
        .command()
        .args(["--add-comments", "app.ts"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        body(&stdout(&output)),
        "#. i18n: button label\n#: app.ts:2\nmsgid   \"Submit\"\nmsgstr  \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_help_without_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
