//! Hash-based lookups: Two Sum (LeetCode 1) and Jewels and Stones
//! (LeetCode 771).

use std::collections::{HashMap, HashSet};

use crate::PreconditionError;

/// Finds two distinct indices whose values sum to `target`, in one pass.
///
/// Previously seen values are kept in a map from value to index; each new
/// element looks up its complement before being inserted, so the returned
/// indices can never coincide. The result is `[earlier, later]` for the
/// first matching pair.
///
/// The problem statement guarantees exactly one solution. If the caller
/// breaks that contract and no pair exists, this reports
/// [`PreconditionError::NoPairForTarget`] rather than scanning quadratically
/// or panicking.
pub fn two_sum(nums: &[i32], target: i32) -> Result<[usize; 2], PreconditionError> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        let complement = target - num;
        if let Some(&j) = seen.get(&complement) {
            return Ok([j, i]);
        }
        seen.insert(num, i);
    }

    Err(PreconditionError::NoPairForTarget(target))
}

/// Counts how many characters of `stones` appear in `jewels`.
/// Case sensitive: `'a'` and `'A'` are different stone types.
pub fn num_jewels_in_stones(jewels: &str, stones: &str) -> usize {
    let jewel_set: HashSet<char> = jewels.chars().collect();
    stones.chars().filter(|stone| jewel_set.contains(stone)).count()
}
