//! POT rendering.
//!
//! The catalog is consumed in a single pass: header first, then one block per
//! message, each terminated by a blank line.

use std::io::{self, Write};

use crate::config::CatalogOptions;
use crate::core::catalog::{Catalog, CatalogEntry};

/// Continuation between two physical lines of a multi-line string.
const CONTINUATION: &str = "\"\n        \"";

/// Render `catalog` as a POT file into `out`.
pub fn write_catalog<W: Write>(
    catalog: Catalog,
    options: &CatalogOptions,
    out: &mut W,
) -> io::Result<()> {
    write_header(options, out)?;
    for entry in catalog.into_entries(options.sort_output) {
        write_entry(&entry, options, out)?;
    }
    out.flush()
}

fn write_header<W: Write>(options: &CatalogOptions, out: &mut W) -> io::Result<()> {
    write!(
        out,
        r#"# SOME DESCRIPTIVE TITLE.
# Copyright (C) YEAR THE PACKAGE'S COPYRIGHT HOLDER
# This file is distributed under the same license as the PACKAGE package.
# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
#
#, fuzzy
msgid   ""
msgstr  "Project-Id-Version: {package}\n"
        "Report-Msgid-Bugs-To: {bugs}\n"
        "POT-Creation-Date: {date}\n"
        "PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
        "Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
        "Language-Team: LANGUAGE <LL@li.org>\n"
        "Language: \n"
        "MIME-Version: 1.0\n"
        "Content-Type: text/plain; charset=CHARSET\n"
        "Content-Transfer-Encoding: 8bit\n"

"#,
        package = options.package_name,
        bugs = options.msgid_bugs_address,
        date = options.creation_date,
    )
}

fn write_entry<W: Write>(
    entry: &CatalogEntry,
    options: &CatalogOptions,
    out: &mut W,
) -> io::Result<()> {
    for occurrence in &entry.occurrences {
        for line in &occurrence.comments {
            writeln!(out, "#. {}", line)?;
        }
    }

    if !options.no_location {
        write!(out, "#:")?;
        for occurrence in &entry.occurrences {
            write!(out, " {}:{}", occurrence.file, occurrence.line)?;
        }
        writeln!(out)?;
    }

    let primary = entry.primary();
    if let Some(hint) = primary.format_hint {
        writeln!(out, "#, {}", hint)?;
    }
    if !primary.msgctxt.is_empty() {
        writeln!(out, "msgctxt \"{}\"", reflow(&primary.msgctxt))?;
    }
    writeln!(out, "msgid   \"{}\"", reflow(&entry.msgid))?;
    if primary.msgid_plural.is_empty() {
        writeln!(out, "msgstr  \"\"")?;
    } else {
        writeln!(out, "msgid_plural   \"{}\"", reflow(&primary.msgid_plural))?;
        writeln!(out, "msgstr[0]  \"\"")?;
        writeln!(out, "msgstr[1]  \"\"")?;
    }
    writeln!(out)
}

/// Break a string after every `\n` escape, without leaving an empty last line.
fn reflow(text: &str) -> String {
    let split = text.replace("\\n", &format!("\\n{}", CONTINUATION));
    match split.strip_suffix(CONTINUATION) {
        Some(trimmed) => trimmed.to_string(),
        None => split,
    }
}
