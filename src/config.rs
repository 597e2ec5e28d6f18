use crate::{
    itemsets::count::generate_frequent_itemsets,
    types::{FrequentItemsets, Item, ItemsetLength, Transaction},
};

/// Options for one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apriori {
    min_support: i32,
    max_len: Option<ItemsetLength>,
    parallel: bool,
}

impl Apriori {
    /// `min_support` is an absolute transaction count. Values below 1 mine
    /// nothing.
    pub fn new(min_support: i32) -> Self {
        Self {
            min_support,
            max_len: None,
            parallel: true,
        }
    }

    /// Stop after the level whose itemsets have `max_len` items.
    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Count the candidates of a level on the rayon pool (on by default).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_support(&self) -> i32 {
        self.min_support
    }

    pub fn max_len(&self) -> Option<ItemsetLength> {
        self.max_len
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn mine(&self, catalog: Option<&[Item]>, transactions: &[Transaction]) -> FrequentItemsets {
        generate_frequent_itemsets(catalog, transactions, self)
    }
}
