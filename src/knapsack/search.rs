//! Recursive branch exploration for 0/1 knapsack.
//!
//! # Algorithm
//!
//! Depth-first enumeration of the include/exclude decision tree. At item
//! `i` the exclude branch is explored first, then the include branch —
//! but only when the new accumulated weight stays strictly under the
//! capacity, so infeasible subtrees are cut as soon as the bound is hit.
//! A leaf at depth n is feasible when `sum_w < capacity` (strict; a load
//! weighing exactly the capacity does not fit).
//!
//! The winning branch carries its witness flags up; the losing branch's
//! flags are dropped. An infeasible leaf produces no candidate at all, so
//! it can never outrank (or tie) a feasible branch of any value.
//!
//! # Complexity
//!
//! O(2^n) leaf evaluations in the worst case. No memoization: subproblems
//! recur with different accumulated sums, so identical states are rare
//! without discretizing weights.

use crate::models::{ItemSet, KnapsackAnswer};

/// Solves the 0/1 knapsack instance exactly.
///
/// Maximizes total value over all subsets whose total weight is strictly
/// below `capacity`. Returns `None` when no subset is feasible, which
/// happens exactly when `capacity <= 0` (the empty subset weighs 0).
///
/// # Examples
///
/// ```
/// use u_exact::models::{Item, ItemSet};
/// use u_exact::knapsack;
///
/// let items = ItemSet::new(vec![
///     Item::new(10.0, 2.0),
///     Item::new(6.0, 1.0),
///     Item::new(8.0, 3.0),
///     Item::new(5.0, 1.0),
/// ])
/// .unwrap();
///
/// let answer = knapsack::solve(&items, 4.0).unwrap();
/// assert_eq!(answer.total_value, 16.0);
/// assert!(answer.is_feasible(&items, 4.0));
/// ```
pub fn solve(items: &ItemSet, capacity: f64) -> Option<KnapsackAnswer> {
    let mut flags = vec![false; items.len()];
    search(0, items, capacity, &mut flags, 0.0, 0.0)
}

/// Explores every packing of items `index..n` on top of the partial
/// selection recorded in `flags[..index]`.
///
/// `flags` is a single caller-owned buffer shared down the call stack;
/// each frame owns slot `index`, writes both branch choices into it, and
/// restores it to `false` before returning so siblings see a clean state.
fn search(
    index: usize,
    items: &ItemSet,
    capacity: f64,
    flags: &mut [bool],
    sum_v: f64,
    sum_w: f64,
) -> Option<KnapsackAnswer> {
    assert!(
        sum_v >= 0.0 && sum_w >= 0.0,
        "accumulated sums must stay non-negative: sum_v={sum_v}, sum_w={sum_w}"
    );
    assert!(index <= items.len(), "index {index} out of range");

    if index == items.len() {
        if sum_w < capacity {
            return Some(KnapsackAnswer::new(sum_v, flags.to_vec()));
        }
        // Infeasible leaf: no candidate, rather than a zero-valued answer
        // that could tie a genuinely feasible zero-value selection.
        return None;
    }

    let item = items.get(index);

    flags[index] = false;
    let excluded = search(index + 1, items, capacity, flags, sum_v, sum_w);

    // Include only while the running weight stays strictly under capacity.
    let included = if sum_w + item.weight() < capacity {
        flags[index] = true;
        let result = search(
            index + 1,
            items,
            capacity,
            flags,
            sum_v + item.value(),
            sum_w + item.weight(),
        );
        flags[index] = false;
        result
    } else {
        None
    };

    // Ties favor the exclude branch: include must be strictly better.
    match (excluded, included) {
        (Some(ex), Some(inc)) => Some(if inc.total_value > ex.total_value {
            inc
        } else {
            ex
        }),
        (ex, inc) => ex.or(inc),
    }
}
