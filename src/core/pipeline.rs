//! File-level driver: read, parse and extract every input, then aggregate.
//!
//! Files are processed in parallel, but results are merged strictly in input
//! order so the catalog's first-seen ordering does not depend on scheduling.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::ExtractOptions;
use crate::core::catalog::Catalog;
use crate::core::extract::{FileExtraction, extract_file};
use crate::core::parsers::{SourceLanguage, parse_source};
use crate::issues::Diagnostic;

/// Result of one run over all inputs.
#[derive(Debug, Default)]
pub struct ExtractionRun {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,
    pub files_processed: usize,
}

impl ExtractionRun {
    /// Append one file's findings; call in input order.
    pub fn merge(&mut self, extraction: FileExtraction) {
        self.catalog.extend(extraction.occurrences);
        self.diagnostics.extend(extraction.diagnostics);
        self.files_processed += 1;
    }
}

/// Extract from already-loaded source text.
pub fn extract_source(
    code: String,
    file_path: &str,
    options: &ExtractOptions,
) -> Result<FileExtraction> {
    let language = options
        .language
        .unwrap_or_else(|| SourceLanguage::from_path(Path::new(file_path)));
    let parsed = parse_source(code, file_path, language)?;
    Ok(extract_file(&parsed, &options.keywords, &options.comments))
}

/// Read and extract every file. The first failure in input order aborts the run.
pub fn run_extraction<P: AsRef<Path> + Sync>(
    files: &[P],
    options: &ExtractOptions,
) -> Result<ExtractionRun> {
    let results: Vec<Result<FileExtraction>> = files
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let code = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            extract_source(code, &path.to_string_lossy(), options)
        })
        .collect();

    let mut run = ExtractionRun::default();
    for result in results {
        run.merge(result?);
    }
    Ok(run)
}
