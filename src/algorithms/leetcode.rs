//! Array and string exercises in the LeetCode style, one section per problem.

use std::collections::HashMap;

use crate::error::{DsaError, Result};

// 42. Trapping Rain Water

/// Water above each bar is bounded by the lower of the tallest bars on its
/// left and right. O(n) time and space.
pub fn trap_rain_water(heights: &[i32]) -> i32 {
    let n = heights.len();
    if n == 0 {
        return 0;
    }

    let mut left_max = vec![0; n];
    left_max[0] = heights[0];
    for i in 1..n {
        left_max[i] = heights[i].max(left_max[i - 1]);
    }

    let mut right_max = vec![0; n];
    right_max[n - 1] = heights[n - 1];
    for i in (0..n - 1).rev() {
        right_max[i] = heights[i].max(right_max[i + 1]);
    }

    (0..n)
        .map(|i| left_max[i].min(right_max[i]) - heights[i])
        .sum()
}

// 88. Merge Sorted Array

/// Merges the first `m` values of `nums1` with the first `n` of `nums2`
/// into `nums1`, filling from the back so nothing is overwritten early.
pub fn merge_sorted(nums1: &mut [i32], m: usize, nums2: &[i32], n: usize) -> Result<()> {
    if nums1.len() != m + n || nums2.len() < n {
        return Err(DsaError::InvalidInput(format!(
            "expected nums1 of length {} and nums2 of at least {}, got {} and {}",
            m + n,
            n,
            nums1.len(),
            nums2.len()
        )));
    }

    let (mut l1, mut l2, mut write) = (m, n, m + n);
    while l2 > 0 {
        write -= 1;
        if l1 > 0 && nums1[l1 - 1] > nums2[l2 - 1] {
            nums1[write] = nums1[l1 - 1];
            l1 -= 1;
        } else {
            nums1[write] = nums2[l2 - 1];
            l2 -= 1;
        }
    }
    Ok(())
}

// 136. Single Number

/// Pairs cancel under XOR. O(1) space.
pub fn single_number(nums: &[i32]) -> i32 {
    nums.iter().fold(0, |acc, &num| acc ^ num)
}

fn frequencies(nums: &[i32]) -> HashMap<i32, usize> {
    let mut freq = HashMap::new();
    for &num in nums {
        *freq.entry(num).or_insert(0) += 1;
    }
    freq
}

pub fn single_number_by_count(nums: &[i32]) -> Option<i32> {
    let freq = frequencies(nums);
    nums.iter().copied().find(|num| freq.get(num) == Some(&1))
}

// 169. Majority Element

/// O(n^2) reference version.
pub fn majority_element_brute(nums: &[i32]) -> Option<i32> {
    let half = nums.len() / 2;
    nums.iter()
        .copied()
        .find(|&candidate| nums.iter().filter(|&&num| num == candidate).count() > half)
}

pub fn majority_element_hashing(nums: &[i32]) -> Option<i32> {
    let half = nums.len() / 2;
    let mut freq: HashMap<i32, usize> = HashMap::new();
    for &num in nums {
        let count = freq.entry(num).or_insert(0);
        *count += 1;
        if *count > half {
            return Some(num);
        }
    }
    None
}

/// Boyer-Moore voting, then a second pass confirming the candidate.
pub fn majority_element_moore(nums: &[i32]) -> Option<i32> {
    let mut candidate = None;
    let mut count = 0usize;
    for &num in nums {
        if count == 0 {
            candidate = Some(num);
        }
        if candidate == Some(num) {
            count += 1;
        } else {
            count -= 1;
        }
    }

    let candidate = candidate?;
    let occurrences = nums.iter().filter(|&&num| num == candidate).count();
    (occurrences > nums.len() / 2).then_some(candidate)
}

// 387. First Unique Character in a String

/// Position (in chars) of the first character that occurs exactly once.
pub fn first_unique_char(s: &str) -> Option<usize> {
    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    s.chars().position(|c| freq[&c] == 1)
}

// 2965. Find Missing and Repeated Values

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingRepeating {
    pub repeating: i32,
    pub missing: i32,
}

fn check_range(arr: &[i32]) -> Result<()> {
    let n = arr.len() as i64;
    match arr.iter().find(|&&value| value < 1 || value as i64 > n) {
        Some(value) => Err(DsaError::InvalidInput(format!(
            "value {} outside 1..={}",
            value, n
        ))),
        None => Ok(()),
    }
}

/// Counts every value in `1..=n`. O(n) time and space.
pub fn find_missing_repeating_hashing(arr: &[i32]) -> Result<MissingRepeating> {
    check_range(arr)?;
    let n = arr.len();
    let mut freq = vec![0usize; n + 1];
    for &value in arr {
        freq[value as usize] += 1;
    }

    let repeating = (1..=n).find(|&i| freq[i] == 2);
    let missing = (1..=n).find(|&i| freq[i] == 0);
    match (repeating, missing) {
        (Some(repeating), Some(missing)) => Ok(MissingRepeating {
            repeating: repeating as i32,
            missing: missing as i32,
        }),
        _ => Err(DsaError::InvalidInput(String::from(
            "expected exactly one repeated and one missing value",
        ))),
    }
}

/// Solves `x - y` and `x^2 - y^2` from the sums of values and squares.
/// O(1) extra space.
pub fn find_missing_repeating_math(arr: &[i32]) -> Result<MissingRepeating> {
    check_range(arr)?;
    let n = arr.len() as i64;
    let expected_sum = n * (n + 1) / 2;
    let expected_square_sum = n * (n + 1) * (2 * n + 1) / 6;

    let (sum, square_sum) = arr.iter().fold((0i64, 0i64), |(sum, squares), &value| {
        let value = value as i64;
        (sum + value, squares + value * value)
    });

    let diff = sum - expected_sum; // x - y
    if diff == 0 {
        return Err(DsaError::InvalidInput(String::from("no repeated value")));
    }
    let square_diff = square_sum - expected_square_sum; // x^2 - y^2
    let total = square_diff / diff; // x + y

    let repeating = (diff + total) / 2;
    let missing = total - repeating;
    Ok(MissingRepeating {
        repeating: repeating as i32,
        missing: missing as i32,
    })
}
