mod issue_id;
mod transaction_id;

pub use issue_id::IssueId;
pub use transaction_id::TransactionId;
