use crate::algorithms::leetcode::*;
use crate::error::DsaError;

#[test]
fn test1_trap_rain_water() {
    assert_eq!(11, trap_rain_water(&[4, 2, 0, 6, 3, 2, 5]));
    assert_eq!(6, trap_rain_water(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]));
    assert_eq!(0, trap_rain_water(&[]));
    assert_eq!(0, trap_rain_water(&[1, 2, 3]));
}

#[test]
fn test2_merge_sorted() {
    let mut nums1 = [1, 2, 3, 0, 0, 0];
    merge_sorted(&mut nums1, 3, &[2, 5, 6], 3).unwrap();
    assert_eq!([1, 2, 2, 3, 5, 6], nums1);

    let mut nums1 = [0];
    merge_sorted(&mut nums1, 0, &[1], 1).unwrap();
    assert_eq!([1], nums1);

    let mut nums1 = [1];
    merge_sorted(&mut nums1, 1, &[], 0).unwrap();
    assert_eq!([1], nums1);

    let mut nums1 = [4, 5, 6, 0, 0, 0];
    merge_sorted(&mut nums1, 3, &[1, 2, 3], 3).unwrap();
    assert_eq!([1, 2, 3, 4, 5, 6], nums1);

    let mut short = [1, 0];
    assert!(matches!(
        merge_sorted(&mut short, 1, &[2, 3], 2),
        Err(DsaError::InvalidInput(_))
    ));
}

#[test]
fn test3_single_number() {
    assert_eq!(1, single_number(&[2, 2, 1]));
    assert_eq!(4, single_number(&[4, 1, 2, 1, 2]));
    assert_eq!(1, single_number(&[1]));
    assert_eq!(-2, single_number(&[-1, -1, -2]));

    let mut large: Vec<i32> = (0..100_000).flat_map(|i| [i, i]).collect();
    large.push(999_999);
    assert_eq!(999_999, single_number(&large));

    assert_eq!(Some(4), single_number_by_count(&[4, 1, 2, 1, 2]));
    assert_eq!(None, single_number_by_count(&[1, 1]));
}

#[test]
fn test4_majority_element() {
    let cases: [(&[i32], Option<i32>); 7] = [
        (&[3, 3, 4], Some(3)),
        (&[2, 2, 1, 1, 1, 2, 2], Some(2)),
        (&[1, 1, 1, 1, 2, 3], Some(1)),
        (&[4, 4, 4, 4, 4, 5, 6], Some(4)),
        (&[6, 5, 5, 5, 5, 5, 5], Some(5)),
        (&[1, 2, 3], None),
        (&[], None),
    ];
    for (nums, expected) in cases {
        assert_eq!(expected, majority_element_brute(nums), "{:?}", nums);
        assert_eq!(expected, majority_element_hashing(nums), "{:?}", nums);
        assert_eq!(expected, majority_element_moore(nums), "{:?}", nums);
    }
}

#[test]
fn test5_first_unique_char() {
    assert_eq!(Some(0), first_unique_char("leetcode"));
    assert_eq!(Some(2), first_unique_char("loveleetcode"));
    assert_eq!(None, first_unique_char("aabb"));
    assert_eq!(Some(3), first_unique_char("abcdabc"));
    assert_eq!(None, first_unique_char(""));
    assert_eq!(Some(0), first_unique_char("x"));
    assert_eq!(Some(3), first_unique_char("aaabcccdeeef"));
    assert_eq!(Some(6), first_unique_char("aabbccd"));
}

#[test]
fn test6_missing_repeating() {
    let cases: [(&[i32], i32, i32); 4] = [
        (&[3, 1, 2, 5, 3], 3, 4),
        (&[1, 2, 2, 4], 2, 3),
        (&[1, 1], 1, 2),
        (&[4, 3, 6, 2, 1, 1], 1, 5),
    ];
    for (arr, repeating, missing) in cases {
        let expected = MissingRepeating { repeating, missing };
        assert_eq!(Ok(expected), find_missing_repeating_hashing(arr), "{:?}", arr);
        assert_eq!(Ok(expected), find_missing_repeating_math(arr), "{:?}", arr);
    }
}

#[test]
fn test7_missing_repeating_rejects_bad_input() {
    assert!(matches!(
        find_missing_repeating_hashing(&[1, 5]),
        Err(DsaError::InvalidInput(_))
    ));
    assert!(matches!(
        find_missing_repeating_math(&[0, 1]),
        Err(DsaError::InvalidInput(_))
    ));
    assert!(matches!(
        find_missing_repeating_hashing(&[1, 2, 3]),
        Err(DsaError::InvalidInput(_))
    ));
    assert!(matches!(
        find_missing_repeating_math(&[2, 1, 3]),
        Err(DsaError::InvalidInput(_))
    ));
}
