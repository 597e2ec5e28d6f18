//! Level-wise Apriori mining of frequent itemsets.
//!
//! ```
//! use frequent_itemsets::apriori;
//!
//! let transactions = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
//! let levels = apriori(&[1, 2, 3, 4, 5], &transactions, 2);
//!
//! assert_eq!(levels.len(), 3);
//! assert_eq!(levels[2][0].itemset, vec![2, 3, 5]);
//! assert_eq!(levels[2][0].count, 2);
//! ```

pub mod combi;
pub mod config;
pub mod itemsets;
pub mod sorted;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::Apriori;
pub use types::{Count, FrequentItemSet, FrequentItemsets, Item, Itemset, Level, Transaction};

/// Mine every frequent itemset of `transactions` that occurs at least
/// `min_support` times, with default options.
pub fn apriori(catalog: &[Item], transactions: &[Transaction], min_support: i32) -> FrequentItemsets {
    Apriori::new(min_support).mine(Some(catalog), transactions)
}

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use pyo3::wrap_pyfunction;

    use crate::{
        types::{Item, ItemsetLength, Transaction},
        wrapper::convert_frequent_itemsets,
        Apriori,
    };

    #[pymodule]
    fn frequent_itemsets(_: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apriori, m)?)?;
        Ok(())
    }

    /// Apriori algorithm for frequent itemsets.
    #[pyfunction]
    #[pyo3(text_signature = "(items, transactions, min_support, max_len=None)")]
    fn apriori(
        py: Python,
        items: Option<Vec<Item>>,
        transactions: Vec<Transaction>,
        min_support: i32,
        max_len: Option<ItemsetLength>,
    ) -> PyResult<PyObject> {
        let mut config = Apriori::new(min_support);
        if let Some(max_len) = max_len {
            config = config.with_max_len(max_len);
        }
        let frequent_itemsets = py.allow_threads(|| config.mine(items.as_deref(), &transactions));
        convert_frequent_itemsets(py, frequent_itemsets)
    }
}
