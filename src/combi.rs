use itertools::Itertools;
use tracing::trace;

use crate::{
    itemsets::support::SupportCounter,
    types::{Count, Item, Itemset},
};

/// Two itemsets of the same size join when they share everything but their
/// last item. Single items always join with a different single item.
pub fn can_join(first: &[Item], second: &[Item]) -> bool {
    if first.len() != second.len() || first.is_empty() {
        return false;
    }
    let last = first.len() - 1;
    first[..last] == second[..last] && first[last] != second[last]
}

/// Shared prefix followed by both last items, in ascending order.
/// Only meaningful when `can_join(first, second)` holds.
pub fn join_pair(first: &[Item], second: &[Item]) -> Itemset {
    let last = first.len() - 1;
    let (a, b) = (first[last], second[last]);

    let mut joined = Vec::with_capacity(first.len() + 1);
    joined.extend_from_slice(&first[..last]);
    joined.push(a.min(b));
    joined.push(a.max(b));
    joined
}

/// Every subset with exactly one item removed: `itemset.len()` of them,
/// each keeping the original order.
pub fn subsets_one_smaller(itemset: &[Item]) -> Vec<Itemset> {
    (0..itemset.len())
        .map(|skip| {
            itemset
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item)
                .collect()
        })
        .collect()
}

/// A candidate is pruned when any one-smaller subset falls below `min_support`.
pub fn should_be_pruned(candidate: &[Item], counter: &SupportCounter, min_support: Count) -> bool {
    subsets_one_smaller(candidate)
        .iter()
        .any(|subset| counter.support(subset) < min_support)
}

/// Builds the distinct candidates one item larger than `itemsets`.
///
/// Pairs are visited once each, in list order, and joined candidates are
/// checked against the support of all their one-smaller subsets.
pub fn self_join_and_prune<'a, I>(
    itemsets: I,
    counter: &SupportCounter,
    min_support: Count,
) -> Vec<Itemset>
where
    I: IntoIterator<Item = &'a [Item]>,
    I::IntoIter: Clone,
{
    itemsets
        .into_iter()
        .tuple_combinations::<(&[Item], &[Item])>()
        .filter(|&(first, second)| can_join(first, second))
        .map(|(first, second)| join_pair(first, second))
        .unique()
        .filter(|candidate| {
            let pruned = should_be_pruned(candidate, counter, min_support);
            if pruned {
                trace!(?candidate, "pruned candidate with an infrequent subset");
            }
            !pruned
        })
        .collect()
}
