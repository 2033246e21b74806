//! Single-pass array checks: Check if Array Is Sorted and Rotated
//! (LeetCode 1752) and Special Array I (LeetCode 3151).

/// Returns true if `nums` equals some non-decreasing array rotated by any
/// offset, including zero. Duplicates are allowed.
///
/// One linear pass: a descent (an element smaller than its predecessor) may
/// happen at most once, and once it has, every later element must stay at or
/// below the first element, since the wrapped tail precedes the original
/// head.
pub fn sorted_and_rotated(nums: &[i32]) -> bool {
    let Some(&first) = nums.first() else {
        return true;
    };

    let mut rotation_point_found = false;
    let mut prev = first;

    for &num in &nums[1..] {
        if num < prev {
            if rotation_point_found {
                return false;
            }
            rotation_point_found = true;
        }
        if rotation_point_found && num > first {
            return false;
        }
        prev = num;
    }

    true
}

/// Returns true if every pair of adjacent elements has differing parity.
/// Arrays shorter than two elements pass trivially.
pub fn special_array(nums: &[i32]) -> bool {
    // `& 1` rather than `% 2`: remainder keeps the sign for negative values.
    nums.windows(2).all(|pair| (pair[0] & 1) != (pair[1] & 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_rotated() {
        assert!(sorted_and_rotated(&[3, 4, 5, 1, 2]));
        assert!(!sorted_and_rotated(&[1, 3, 2]));
        assert!(sorted_and_rotated(&[1, 2, 3]));
        assert!(sorted_and_rotated(&[2, 1]));
    }

    #[test]
    fn test_sorted_and_rotated_trivial_lengths() {
        assert!(sorted_and_rotated(&[]));
        assert!(sorted_and_rotated(&[7]));
    }

    #[test]
    fn test_sorted_and_rotated_duplicates() {
        assert!(sorted_and_rotated(&[2, 3, 1, 2]));
        assert!(sorted_and_rotated(&[2, 2, 1, 2, 2]));
        assert!(!sorted_and_rotated(&[2, 1, 3]));
        // Two descents.
        assert!(!sorted_and_rotated(&[3, 1, 3, 1]));
    }

    #[test]
    fn test_sorted_and_rotated_tail_above_head() {
        // Single descent, but the wrapped tail rises past the first element.
        assert!(!sorted_and_rotated(&[1, 2, 1, 2]));
    }

    #[test]
    fn test_special_array() {
        assert!(special_array(&[1, 2, 3, 4]));
        assert!(!special_array(&[2, 4, 6]));
        assert!(!special_array(&[4, 3, 1]));
        assert!(special_array(&[4, 3]));
    }

    #[test]
    fn test_special_array_trivial_lengths() {
        assert!(special_array(&[]));
        assert!(special_array(&[5]));
    }

    #[test]
    fn test_special_array_negative_values() {
        assert!(special_array(&[-3, -2, -1]));
        assert!(!special_array(&[-2, -4]));
        assert!(!special_array(&[-3, 1]));
        assert!(special_array(&[-3, 2]));
    }
}
