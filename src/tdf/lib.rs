mod fetcher;
pub mod ids;
pub mod input;
pub mod loader;
mod report;
mod result;
mod transaction;

pub use fetcher::TransactionDataFetcher;
pub use loader::{JsonFileSource, JsonReaderSource, LoadError, TransactionSource};
pub use report::{ClientReport, QueryReport};
pub use result::Result;
pub use transaction::{ComplianceIssue, Transaction};

pub fn load_fetcher(source: &impl TransactionSource) -> Result<TransactionDataFetcher> {
    let fetcher = TransactionDataFetcher::load(source)?;

    return Ok(fetcher);
}
