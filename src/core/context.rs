//! Scan context: configuration, file enumeration, and per-file extraction.

use std::{fs, path::PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use super::extract::extract;
use super::rewrite::FileReport;
use super::scanner::scan_files;
use crate::config::{Config, load_config};

/// Overrides applied on top of the loaded configuration.
#[derive(Debug, Default)]
pub struct ScanOptions {
    pub source_root: Option<PathBuf>,
    pub resource_file: Option<PathBuf>,
    pub verbose: bool,
}

/// A file that could not be read.
#[derive(Debug, Clone)]
pub struct ReadFailure {
    pub path: String,
    pub error: String,
}

/// Everything a command needs: resolved config, the scanned file list, and
/// per-file extraction results.
pub struct ScanContext {
    pub config: Config,
    /// All scanned file paths, sorted.
    pub files: Vec<String>,
    /// Reports for files containing Chinese literals, in `files` order.
    pub reports: Vec<FileReport>,
    pub read_failures: Vec<ReadFailure>,
    /// Paths the walker could not access.
    pub skipped_count: usize,
}

impl ScanContext {
    pub fn new(options: &ScanOptions) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = load_config(&cwd)?.config;

        if let Some(root) = &options.source_root {
            config.source_root = root.to_string_lossy().into_owned();
        }
        if let Some(file) = &options.resource_file {
            config.resource_file = file.to_string_lossy().into_owned();
        }

        let scan = scan_files(
            &config.source_root,
            &config.includes,
            &config.ignores,
            &config.extensions,
            config.ignore_test_files,
            options.verbose,
        );

        let mut files: Vec<String> = scan.files.into_iter().collect();
        files.sort();

        // Files are independent; extraction parallelizes cleanly. The sorted
        // file order is what keeps key assignment deterministic later.
        let results: Vec<std::result::Result<FileReport, ReadFailure>> = files
            .par_iter()
            .map(|path| match fs::read_to_string(path) {
                Ok(content) => {
                    let matches = extract(path, &content, &config.ignore_texts);
                    Ok(FileReport {
                        path: path.clone(),
                        content,
                        matches,
                    })
                }
                Err(e) => Err(ReadFailure {
                    path: path.clone(),
                    error: e.to_string(),
                }),
            })
            .collect();

        let mut reports = Vec::new();
        let mut read_failures = Vec::new();
        for result in results {
            match result {
                Ok(report) if !report.matches.is_empty() => reports.push(report),
                Ok(_) => {}
                Err(failure) => read_failures.push(failure),
            }
        }

        Ok(Self {
            config,
            files,
            reports,
            read_failures,
            skipped_count: scan.skipped_count,
        })
    }

    /// Absolute or config-relative path of the resource table to write.
    pub fn resource_path(&self) -> PathBuf {
        PathBuf::from(&self.config.resource_file)
    }
}
