#[macro_use]
extern crate log;

pub mod config;
mod error;
pub mod extract;
pub mod fetch;
mod repo;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use extract::{extract, Extraction};
pub use fetch::{Fetch, HttpFetcher};
pub use repo::{MissingField, Project, Skipped};

use std::path::PathBuf;
use std::process::ExitCode;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Written { path: PathBuf, count: usize },
    NoEntries,
}

impl Status {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Status::Written { .. } => ExitCode::SUCCESS,
            Status::NoEntries => ExitCode::from(2),
        }
    }
}

/// Diagnostic lines for an error: the error itself, then each cause.
pub fn err_lines(e: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", e)];
    lines.extend(e.chain().skip(1).map(|c| format!("- caused by: {}", c)));
    lines
}

pub fn err_log(e: &anyhow::Error) {
    for line in err_lines(e) {
        error!("{}", line);
    }
}

/// Map the outcome of a run to the process exit code, logging any error.
pub fn finish(result: anyhow::Result<Status>) -> ExitCode {
    match result {
        Ok(status) => status.exit_code(),
        Err(e) => {
            err_log(&e);
            ExitCode::FAILURE
        }
    }
}

pub struct TrendingReport<F = HttpFetcher> {
    config: Config,
    fetcher: F,
}

impl TrendingReport<HttpFetcher> {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetch> TrendingReport<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        TrendingReport { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the trending page, extract its entries and write the report.
    ///
    /// The output file is left untouched unless at least one entry was found.
    pub fn run(&self) -> Result<Status> {
        let url = &self.config.source_url;
        let body = self.fetcher.fetch(url)?;
        debug!("fetched {} bytes from {}", body.len(), url);

        let Extraction { projects, skipped } = extract(&body, &self.config.default_description);
        for s in &skipped {
            warn!("{} not found for project #{}, skipping", s.missing, s.index);
        }
        for p in &projects {
            debug!("{} - {}", p.name, p.link);
        }

        if projects.is_empty() {
            warn!("No projects found. Please check the page structure or URL.");
            return Ok(Status::NoEntries);
        }

        let html = report::render(&projects, self.config.escape_html);
        let path = self.config.output_path.clone();
        report::write(&path, &html)?;

        info!(
            "HTML report with {} projects written to {}",
            projects.len(),
            path.display()
        );
        Ok(Status::Written {
            path,
            count: projects.len(),
        })
    }
}
