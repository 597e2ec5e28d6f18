use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result},
};

pub type Item = i32;
pub type Count = u32;

/// Unique items, kept sorted ascending once built by the engine.
pub type Itemset = Vec<Item>;
pub type Transaction = Vec<Item>;

pub type ItemsetLength = usize;
pub type ItemsetCounts = HashMap<Itemset, Count>;

/// All frequent itemsets of one size, in generation order.
pub type Level = Vec<FrequentItemSet>;

/// One level per itemset size, starting at size 1.
pub type FrequentItemsets = Vec<Level>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequentItemSet {
    pub itemset: Itemset,
    pub count: Count,
}

impl FrequentItemSet {
    pub fn new(itemset: Itemset, count: Count) -> Self {
        Self { itemset, count }
    }

    pub fn len(&self) -> ItemsetLength {
        self.itemset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemset.is_empty()
    }
}

impl Display for FrequentItemSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{")?;
        for (i, item) in self.itemset.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}: {}", self.count)
    }
}
