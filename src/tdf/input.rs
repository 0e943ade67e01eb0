use crate::ids::{IssueId, TransactionId};
use crate::{ComplianceIssue, Transaction};

use serde::Deserialize;

/// Represents one element of the source JSON array
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    #[serde(alias = "id")]
    pub mtn: u64,

    pub amount: f64,
    pub sender_full_name: String,
    pub beneficiary_full_name: String,

    #[serde(default)]
    pub issue_id: Option<u64>,

    #[serde(default)]
    pub issue_solved: Option<bool>,

    #[serde(default)]
    pub issue_message: Option<String>,
}

impl InputRecord {
    /// Folds the flat issue columns into an optional `ComplianceIssue`.
    /// `issueSolved` and `issueMessage` are dropped when there is no `issueId`;
    /// a missing or null `issueSolved` reads as `false`.
    pub fn into_transaction(self) -> Transaction {
        let issue = self.issue_id.map(|id| ComplianceIssue {
            id: IssueId(id),
            solved: self.issue_solved.unwrap_or(false),
            message: self.issue_message,
        });

        if let Some(issue) = &issue {
            log::debug!("Transaction {} carries compliance issue {}", self.mtn, issue.id);
        }

        Transaction {
            id: TransactionId(self.mtn),
            amount: self.amount,
            sender_full_name: self.sender_full_name,
            beneficiary_full_name: self.beneficiary_full_name,
            issue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_issue() {
        let json = r#"{
            "mtn": 663458,
            "amount": 430.2,
            "senderFullName": "Tom Shelby",
            "senderAge": 22,
            "beneficiaryFullName": "Alfie Solomons",
            "beneficiaryAge": 33,
            "issueId": 1,
            "issueSolved": false,
            "issueMessage": "Looks like money laundering"
        }"#;

        let record: InputRecord = serde_json::from_str(json).unwrap();
        let transaction = record.into_transaction();

        assert_eq!(transaction.id, TransactionId(663458));
        assert_eq!(transaction.amount, 430.2);
        assert_eq!(transaction.sender_full_name, "Tom Shelby");
        assert_eq!(transaction.beneficiary_full_name, "Alfie Solomons");
        assert_eq!(
            transaction.issue,
            Some(ComplianceIssue {
                id: IssueId(1),
                solved: false,
                message: Some("Looks like money laundering".to_string()),
            })
        );
    }

    #[test]
    fn record_without_issue() {
        let json = r#"{
            "mtn": 1284564,
            "amount": 150.2,
            "senderFullName": "Tom Shelby",
            "beneficiaryFullName": "Arthur Shelby",
            "issueId": null,
            "issueSolved": true,
            "issueMessage": null
        }"#;

        let record: InputRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.into_transaction().issue, None);
    }

    #[test]
    fn record_with_id_alias_and_missing_issue_fields() {
        let json = r#"{
            "id": 7,
            "amount": 5,
            "senderFullName": "Grace Burgess",
            "beneficiaryFullName": "Michael Gray"
        }"#;

        let record: InputRecord = serde_json::from_str(json).unwrap();
        let transaction = record.into_transaction();

        assert_eq!(transaction.id, TransactionId(7));
        assert_eq!(transaction.amount, 5.0);
        assert_eq!(transaction.issue, None);
    }

    #[test]
    fn record_with_null_issue_solved() {
        let json = r#"{
            "mtn": 1,
            "amount": 1.0,
            "senderFullName": "A",
            "beneficiaryFullName": "B",
            "issueId": null,
            "issueSolved": null,
            "issueMessage": null
        }"#;

        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.into_transaction().issue, None);

        let json = r#"{
            "mtn": 2,
            "amount": 1.0,
            "senderFullName": "A",
            "beneficiaryFullName": "B",
            "issueId": 4,
            "issueSolved": null,
            "issueMessage": "pending review"
        }"#;

        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.into_transaction().issue,
            Some(ComplianceIssue {
                id: IssueId(4),
                solved: false,
                message: Some("pending review".to_string()),
            })
        );
    }

    #[test]
    fn record_missing_required_field() {
        let json = r#"{ "mtn": 1, "amount": 1.0, "senderFullName": "Tom Shelby" }"#;

        assert!(serde_json::from_str::<InputRecord>(json).is_err());
    }
}
