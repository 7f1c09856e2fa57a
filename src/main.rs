use std::env::args;
use std::process::ExitCode;

use anyhow::Context;
use env_logger::Env;
use trending_report::*;

fn run() -> anyhow::Result<Status> {
    let config = match args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let report = TrendingReport::new(config)?;
    let status = report
        .run()
        .context("An error occurred while generating the report")?;
    Ok(status)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    finish(run())
}
