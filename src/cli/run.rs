//! Run one extraction: build options from the arguments, scan every file,
//! report skipped call sites and write the catalog.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, report};
use crate::config::{
    CatalogOptions, ExtractOptions, KeywordSource, comment_policy, creation_date_now,
    load_keywords,
};
use crate::core::{Catalog, run_extraction, writer::write_catalog};

/// Fully resolved configuration for one run.
#[derive(Debug)]
pub struct Job {
    pub files: Vec<PathBuf>,
    pub extract: ExtractOptions,
    pub catalog: CatalogOptions,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Job {
    /// Resolve arguments into options. Keyword config errors surface here,
    /// before any file is read.
    pub fn from_args(args: Arguments) -> Result<Self> {
        let keywords = match &args.keywords.keyword_cfg {
            Some(path) => load_keywords(KeywordSource::File(path))?,
            None => load_keywords(KeywordSource::Names {
                singular: &args.keywords.keyword,
                plural: &args.keywords.keyword_plural,
                contextual: &args.keywords.keyword_contextual,
                skip_args: args.keywords.skip_args,
            })?,
        };

        Ok(Self {
            files: args.files,
            extract: ExtractOptions {
                keywords,
                comments: comment_policy(
                    args.comments.add_comments,
                    args.comments.add_comments_tag.as_deref(),
                ),
                language: args.language,
            },
            catalog: CatalogOptions {
                sort_output: args.catalog.sort_output,
                no_location: args.catalog.no_location,
                package_name: args.catalog.package_name,
                msgid_bugs_address: args.catalog.msgid_bugs_address,
                creation_date: creation_date_now(),
            },
            output: args.output,
            quiet: args.quiet,
        })
    }
}

/// Counts reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub messages: usize,
}

pub fn run(job: Job) -> Result<RunSummary> {
    let run = run_extraction(&job.files, &job.extract)?;

    if !job.quiet {
        report::print_diagnostics(&run.diagnostics);
    }

    let summary = RunSummary {
        files: run.files_processed,
        messages: run.catalog.len(),
    };

    write_output(run.catalog, &job.catalog, job.output.as_deref())?;
    Ok(summary)
}

fn write_output(catalog: Catalog, options: &CatalogOptions, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_catalog(catalog, options, &mut writer)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_catalog(catalog, options, &mut stdout).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}
