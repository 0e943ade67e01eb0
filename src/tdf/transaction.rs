use crate::ids::{IssueId, TransactionId};

use serde::Serialize;

/// Transaction represents one directed transfer from a sender to a beneficiary
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: f64,
    pub sender_full_name: String,
    pub beneficiary_full_name: String,
    pub issue: Option<ComplianceIssue>,
}

/// A flagged concern on a transaction, with its resolution state
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ComplianceIssue {
    pub id: IssueId,
    pub solved: bool,
    pub message: Option<String>,
}

impl Transaction {
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name == client_full_name || self.beneficiary_full_name == client_full_name
    }

    pub fn open_issue(&self) -> Option<&ComplianceIssue> {
        self.issue.as_ref().filter(|issue| !issue.solved)
    }

    pub fn solved_issue(&self) -> Option<&ComplianceIssue> {
        self.issue.as_ref().filter(|issue| issue.solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_transaction(issue: Option<ComplianceIssue>) -> Transaction {
        Transaction {
            id: TransactionId(1),
            amount: 10.0,
            sender_full_name: "Tom Shelby".to_string(),
            beneficiary_full_name: "Alfie Solomons".to_string(),
            issue,
        }
    }

    #[test]
    fn involves() {
        let transaction = build_transaction(None);

        assert!(transaction.involves("Tom Shelby"));
        assert!(transaction.involves("Alfie Solomons"));
        assert!(!transaction.involves("tom shelby"));
        assert!(!transaction.involves("Arthur Shelby"));
    }

    #[test]
    fn open_and_solved_issue() {
        let open = build_transaction(Some(ComplianceIssue {
            id: IssueId(1),
            solved: false,
            message: None,
        }));
        assert!(open.open_issue().is_some());
        assert!(open.solved_issue().is_none());

        let solved = build_transaction(Some(ComplianceIssue {
            id: IssueId(2),
            solved: true,
            message: Some("Looks like money laundering".to_string()),
        }));
        assert!(solved.open_issue().is_none());
        assert_eq!(solved.solved_issue().map(|issue| issue.id), Some(IssueId(2)));

        let clean = build_transaction(None);
        assert!(clean.open_issue().is_none());
        assert!(clean.solved_issue().is_none());
    }
}
