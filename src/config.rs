use tdf::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so stdout only carries the report
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
