use crate::{
    sorted::{contains_item, sort_items},
    types::{Count, Item, Transaction},
};

/// Counts how many transactions contain every item of an itemset.
///
/// Each transaction is sorted once on construction so that every probe is a
/// binary search. The caller's transactions are only read.
#[derive(Debug, Clone)]
pub struct SupportCounter {
    transactions: Vec<Transaction>,
}

impl SupportCounter {
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            transactions: transactions
                .iter()
                .map(|transaction| sort_items(transaction))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Length of the longest transaction; no itemset can be larger.
    pub fn longest_transaction(&self) -> usize {
        self.transactions
            .iter()
            .map(|transaction| transaction.len())
            .max()
            .unwrap_or(0)
    }

    pub fn support(&self, itemset: &[Item]) -> Count {
        self.transactions
            .iter()
            .filter(|transaction| transaction.len() >= itemset.len())
            .filter(|transaction| {
                itemset
                    .iter()
                    .all(|&item| contains_item(transaction, item))
            })
            .count() as Count
    }
}

/// Support of `itemset` without a prepared counter: every transaction is
/// sorted on the fly before it is probed.
pub fn count_support(itemset: &[Item], transactions: &[Transaction]) -> Count {
    transactions
        .iter()
        .filter(|transaction| {
            let sorted = sort_items(transaction);
            itemset.iter().all(|&item| contains_item(&sorted, item))
        })
        .count() as Count
}
