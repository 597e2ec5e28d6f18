use crate::{
    combi::self_join_and_prune,
    config::Apriori,
    itemsets::support::SupportCounter,
    types::{Count, FrequentItemSet, FrequentItemsets, Item, Itemset, Level, Transaction},
};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Generate frequent itemsets level by level, starting with single items
/// from `catalog`, until a level comes out empty.
///
/// A missing or empty catalog, no transactions, or a non-positive minimum
/// support all give an empty result.
pub fn generate_frequent_itemsets(
    catalog: Option<&[Item]>,
    transactions: &[Transaction],
    config: &Apriori,
) -> FrequentItemsets {
    let mut all_frequent_itemsets: FrequentItemsets = Vec::new();

    let catalog = match catalog {
        Some(catalog) if !catalog.is_empty() => catalog,
        _ => {
            debug!("no item catalog, nothing to mine");
            return all_frequent_itemsets;
        }
    };
    if transactions.is_empty() || config.min_support() <= 0 || config.max_len() == Some(0) {
        debug!(
            transactions = transactions.len(),
            min_support = config.min_support(),
            max_len = ?config.max_len(),
            "degenerate input, nothing to mine"
        );
        return all_frequent_itemsets;
    }

    let min_support = config.min_support() as Count;
    let counter = SupportCounter::new(transactions);
    debug!(
        items = catalog.len(),
        transactions = counter.len(),
        longest = counter.longest_transaction(),
        min_support,
        "mining frequent itemsets"
    );

    // 1-itemset
    let mut frequent = frequent_one_itemsets(catalog, &counter, min_support, config.is_parallel());
    let mut size = 1;

    // k-itemset, k >= 2
    while !frequent.is_empty() {
        debug!(size, frequent = frequent.len(), "level complete");

        if config.max_len().map_or(false, |max_len| size >= max_len) {
            all_frequent_itemsets.push(frequent);
            break;
        }

        let candidates = self_join_and_prune(
            frequent.iter().map(|frequent_itemset| frequent_itemset.itemset.as_slice()),
            &counter,
            min_support,
        );
        all_frequent_itemsets.push(frequent);

        size += 1;
        debug!(size, candidates = candidates.len(), "counting candidates");
        frequent = frequent_k_itemsets(candidates, &counter, min_support, config.is_parallel());
    }

    all_frequent_itemsets
}

/// Frequent 1-itemsets, in catalog order.
pub fn frequent_one_itemsets(
    catalog: &[Item],
    counter: &SupportCounter,
    min_support: Count,
    parallel: bool,
) -> Level {
    let candidates = catalog.iter().map(|&item| vec![item]).collect();
    frequent_k_itemsets(candidates, counter, min_support, parallel)
}

/// Keeps the candidates whose support reaches `min_support`, in candidate
/// order whether or not counting runs in parallel.
pub fn frequent_k_itemsets(
    candidates: Vec<Itemset>,
    counter: &SupportCounter,
    min_support: Count,
    parallel: bool,
) -> Level {
    let keep_frequent = |candidate: Itemset| {
        let count = counter.support(&candidate);
        if count >= min_support {
            let frequent_itemset = FrequentItemSet::new(candidate, count);
            trace!(%frequent_itemset, "frequent");
            Some(frequent_itemset)
        } else {
            None
        }
    };

    if parallel {
        candidates.into_par_iter().filter_map(keep_frequent).collect()
    } else {
        candidates.into_iter().filter_map(keep_frequent).collect()
    }
}
