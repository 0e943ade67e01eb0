use crate::ids::{IssueId, TransactionId};
use crate::{Transaction, TransactionDataFetcher};

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Every query answered once over a fetcher
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport<'a> {
    pub total_transaction_amount: f64,
    pub max_transaction_amount: f64,
    pub unique_clients: usize,
    pub transactions_by_beneficiary_name: BTreeMap<TransactionId, &'a str>,
    pub unsolved_issue_ids: BTreeSet<IssueId>,
    pub solved_issue_messages: Vec<&'a str>,
    pub top3_transactions_by_amount: Vec<&'a Transaction>,
    pub top_sender: Option<&'a str>,
    pub clients: Vec<ClientReport<'a>>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientReport<'a> {
    pub name: &'a str,
    pub total_amount_sent: f64,
    pub has_open_compliance_issues: bool,
}

impl<'a> QueryReport<'a> {
    pub fn build(fetcher: &'a TransactionDataFetcher, clients: &'a [String]) -> Self {
        log::debug!("Building report for {} clients", clients.len());

        let clients = clients
            .iter()
            .map(|name| ClientReport {
                name: name.as_str(),
                total_amount_sent: fetcher.total_transaction_amount_sent_by(name),
                has_open_compliance_issues: fetcher.has_open_compliance_issues(name),
            })
            .collect();

        return Self {
            total_transaction_amount: fetcher.total_transaction_amount(),
            max_transaction_amount: fetcher.max_transaction_amount(),
            unique_clients: fetcher.count_unique_clients(),
            transactions_by_beneficiary_name: fetcher.transactions_by_beneficiary_name(),
            unsolved_issue_ids: fetcher.unsolved_issue_ids(),
            solved_issue_messages: fetcher.all_solved_issue_messages(),
            top3_transactions_by_amount: fetcher.top3_transactions_by_amount(),
            top_sender: fetcher.top_sender(),
            clients,
        };
    }
}
