use crate::types::Item;

/// Returns a sorted copy of `items`. Duplicates are kept.
pub fn sort_items(items: &[Item]) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Binary search for `target`. `sorted` must be in ascending order.
pub fn contains_item(sorted: &[Item], target: Item) -> bool {
    debug_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    sorted.binary_search(&target).is_ok()
}
