use std::collections::HashSet;

use frequent_itemsets::{apriori, Apriori, Count, FrequentItemsets, Item, Itemset, Transaction};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

const NUM_ITEMS: Item = 9;

/// Seeded random dataset: transactions of distinct items drawn from
/// `0..NUM_ITEMS`, with lower item ids more popular.
fn random_transactions(seed: u64, num_transactions: usize) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_transactions)
        .map(|_| {
            let mut transaction: Transaction = (0..NUM_ITEMS)
                .filter(|&item| rng.gen_bool(0.8 / (1.0 + item as f64 * 0.3)))
                .collect();
            // Order inside a transaction must not matter.
            let len = transaction.len();
            if len > 1 {
                transaction.swap(0, rng.gen_range(0..len));
            }
            transaction
        })
        .collect()
}

fn catalog() -> Vec<Item> {
    (0..NUM_ITEMS).collect()
}

fn brute_force_support(itemset: &[Item], transactions: &[Transaction]) -> Count {
    transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count() as Count
}

fn brute_force_frequent(
    catalog: &[Item],
    transactions: &[Transaction],
    min_support: Count,
) -> HashSet<(Itemset, Count)> {
    catalog
        .iter()
        .copied()
        .powerset()
        .filter(|itemset| !itemset.is_empty())
        .map(|itemset| {
            let count = brute_force_support(&itemset, transactions);
            (itemset, count)
        })
        .filter(|&(_, count)| count >= min_support)
        .collect()
}

fn flatten(levels: &FrequentItemsets) -> HashSet<(Itemset, Count)> {
    levels
        .iter()
        .flatten()
        .map(|frequent| (frequent.itemset.clone(), frequent.count))
        .collect()
}

#[test]
fn example_scenario() {
    let transactions = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
    let levels = apriori(&[1, 2, 3, 4, 5], &transactions, 2);

    let rendered: Vec<Vec<String>> = levels
        .iter()
        .map(|level| level.iter().map(ToString::to_string).collect())
        .collect();
    assert_eq!(
        rendered,
        vec![
            vec!["{1}: 2", "{2}: 3", "{3}: 3", "{5}: 3"],
            vec!["{1, 3}: 2", "{2, 3}: 2", "{2, 5}: 3", "{3, 5}: 2"],
            vec!["{2, 3, 5}: 2"],
        ]
    );
}

#[test]
fn matches_brute_force_enumeration() {
    for seed in 0..6 {
        let transactions = random_transactions(seed, 40);
        for min_support in 1..=12 {
            let levels = apriori(&catalog(), &transactions, min_support);
            let expected = brute_force_frequent(&catalog(), &transactions, min_support as Count);
            assert_eq!(flatten(&levels), expected, "seed {} min_support {}", seed, min_support);
        }
    }
}

#[test]
fn support_and_threshold_hold() {
    let transactions = random_transactions(11, 60);
    let min_support = 6;
    let levels = apriori(&catalog(), &transactions, min_support);
    assert!(!levels.is_empty());

    for frequent in levels.iter().flatten() {
        assert_eq!(frequent.count, brute_force_support(&frequent.itemset, &transactions));
        assert!(frequent.count >= min_support as Count);
    }
}

#[test]
fn itemsets_are_sorted_and_sized_by_level() {
    let transactions = random_transactions(3, 50);
    let levels = apriori(&catalog(), &transactions, 3);

    for (index, level) in levels.iter().enumerate() {
        assert!(!level.is_empty());
        for frequent in level {
            assert_eq!(frequent.itemset.len(), index + 1);
            assert!(frequent.itemset.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn every_one_smaller_subset_is_in_the_prior_level() {
    let transactions = random_transactions(5, 50);
    let levels = apriori(&catalog(), &transactions, 4);
    assert!(levels.len() > 2);

    for pair in levels.windows(2) {
        let prior: HashSet<&Itemset> = pair[0].iter().map(|frequent| &frequent.itemset).collect();
        for frequent in &pair[1] {
            for subset in frequent.itemset.iter().copied().combinations(frequent.itemset.len() - 1) {
                assert!(prior.contains(&subset), "{:?} missing from prior level", subset);
            }
        }
    }
}

#[test]
fn levels_never_exceed_longest_transaction() {
    let transactions = random_transactions(8, 30);
    let longest = transactions.iter().map(Vec::len).max().unwrap_or(0);
    let levels = apriori(&catalog(), &transactions, 1);
    assert!(levels.len() <= longest);
}

#[test]
fn runs_are_deterministic() {
    let transactions = random_transactions(21, 80);
    let first = Apriori::new(5).mine(Some(catalog().as_slice()), &transactions);
    let second = Apriori::new(5).mine(Some(catalog().as_slice()), &transactions);
    let sequential = Apriori::new(5).with_parallel(false).mine(Some(catalog().as_slice()), &transactions);
    assert_eq!(first, second);
    assert_eq!(first, sequential);
}

#[test]
fn max_len_truncates_levels() {
    let transactions = random_transactions(13, 50);
    let full = apriori(&catalog(), &transactions, 2);
    assert!(full.len() > 2);

    let capped = Apriori::new(2).with_max_len(2).mine(Some(catalog().as_slice()), &transactions);
    assert_eq!(capped, full[..2].to_vec());
}

#[test]
fn min_support_above_transaction_count_is_empty() {
    let transactions = random_transactions(1, 10);
    assert!(apriori(&catalog(), &transactions, 11).is_empty());
}

#[test]
fn transactions_are_left_untouched() {
    let transactions = vec![vec![5, 2, 3], vec![3, 1], vec![2, 5]];
    let before = transactions.clone();
    let _ = apriori(&[1, 2, 3, 5], &transactions, 1);
    assert_eq!(transactions, before);
}
