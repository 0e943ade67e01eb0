use crate::ids::{IssueId, TransactionId};
use crate::loader::{LoadError, TransactionSource};
use crate::Transaction;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Answers analytical queries over a fully loaded, read-only sequence of transactions.
///
/// The sequence keeps its load order, which decides tie-breaks in the ranking queries.
#[derive(Debug, Default, Clone)]
pub struct TransactionDataFetcher {
    transactions: Vec<Transaction>,
}

impl TransactionDataFetcher {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        log::debug!("Building fetcher over {} transactions", transactions.len());

        return Self { transactions };
    }

    pub fn load(source: &impl TransactionSource) -> Result<Self, LoadError> {
        let transactions = source.load()?;

        return Ok(Self::new(transactions));
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sum of the amounts of all transactions
    pub fn total_transaction_amount(&self) -> f64 {
        sum_amounts(self.transactions.iter())
    }

    /// Returns the sum of the amounts of all transactions sent by the specified client.
    /// Names match exactly, case included.
    pub fn total_transaction_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        sum_amounts(
            self.transactions
                .iter()
                .filter(|tx| tx.sender_full_name == sender_full_name),
        )
    }

    /// Returns the highest transaction amount, or `0.0` when there are no transactions
    pub fn max_transaction_amount(&self) -> f64 {
        self.max_transaction_amount_checked().unwrap_or(0.0)
    }

    /// Returns the highest transaction amount, or `None` when there are no transactions
    pub fn max_transaction_amount_checked(&self) -> Option<f64> {
        self.transactions
            .iter()
            .map(|tx| tx.amount)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Counts the distinct names appearing as sender or beneficiary
    pub fn count_unique_clients(&self) -> usize {
        self.transactions
            .iter()
            .flat_map(|tx| [tx.sender_full_name.as_str(), tx.beneficiary_full_name.as_str()])
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Returns whether a client, as sender or beneficiary, has at least one transaction
    /// with a compliance issue that has not been solved
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .filter(|tx| tx.involves(client_full_name))
            .any(|tx| tx.open_issue().is_some())
    }

    /// Maps every transaction id to its beneficiary name. On duplicate ids the first
    /// transaction in load order wins.
    pub fn transactions_by_beneficiary_name(&self) -> BTreeMap<TransactionId, &str> {
        let mut by_id = BTreeMap::new();

        for tx in self.transactions.iter() {
            if by_id.contains_key(&tx.id) {
                log::warn!("Duplicate transaction id {}, keeping first occurrence", tx.id);
                continue;
            }

            by_id.insert(tx.id, tx.beneficiary_full_name.as_str());
        }

        by_id
    }

    /// Returns the identifiers of all open compliance issues
    pub fn unsolved_issue_ids(&self) -> BTreeSet<IssueId> {
        self.transactions
            .iter()
            .filter_map(|tx| tx.open_issue())
            .map(|issue| issue.id)
            .collect()
    }

    /// Returns the messages of all solved issues, in load order, duplicates kept
    pub fn all_solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter_map(|tx| tx.solved_issue())
            .filter_map(|issue| issue.message.as_deref())
            .collect()
    }

    /// Returns the 3 transactions with highest amount sorted by amount descending
    pub fn top3_transactions_by_amount(&self) -> Vec<&Transaction> {
        self.top_transactions_by_amount(3)
    }

    /// Returns up to `n` transactions by amount descending. Equal amounts keep load order.
    pub fn top_transactions_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();

        // `sort_by` is stable
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked.truncate(n);

        ranked
    }

    /// Returns the sender with the most total sent amount. Ties go to the sender seen first.
    pub fn top_sender(&self) -> Option<&str> {
        let mut order: Vec<&str> = vec![];
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for tx in self.transactions.iter() {
            let sender = tx.sender_full_name.as_str();

            match totals.get_mut(sender) {
                Some(total) => *total += tx.amount,
                None => {
                    order.push(sender);
                    totals.insert(sender, tx.amount);
                }
            }
        }

        let mut top: Option<(&str, f64)> = None;

        for sender in order {
            let total = totals[sender];

            if top.map_or(true, |(_, best)| total > best) {
                top = Some((sender, total));
            }
        }

        top.map(|(sender, _)| sender)
    }
}

/// Starts from `0.0` so an empty sum never prints as `-0.0`
fn sum_amounts<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions.fold(0.0, |total, tx| total + tx.amount)
}
