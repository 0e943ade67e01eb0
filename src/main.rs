mod args;
mod config;

use tdf::{JsonFileSource, QueryReport, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Loading transactions...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let source = JsonFileSource::new(input_args.input_path);
    let fetcher = tdf::load_fetcher(&source)?;

    log::debug!("Loaded {} transactions. Building report...", fetcher.len());

    let report = QueryReport::build(&fetcher, &input_args.clients);
    let output = serde_json::to_string_pretty(&report)?;

    log::debug!("Writing report to stdout");
    println!("{output}");

    log::debug!("Application finished successfully!");

    Ok(())
}
