use crate::error::{DsaError, Result};

/// Returns a copy of `arr` with `element` inserted at `index`.
pub fn insert_element(arr: &[i32], index: usize, element: i32) -> Result<Vec<i32>> {
    if index > arr.len() {
        return Err(DsaError::IndexOutOfRange { index, len: arr.len() });
    }
    let mut result = Vec::with_capacity(arr.len() + 1);
    result.extend_from_slice(&arr[..index]);
    result.push(element);
    result.extend_from_slice(&arr[index..]);
    Ok(result)
}

/// Returns a copy of `arr` without the element at `index`.
pub fn delete_element(arr: &[i32], index: usize) -> Result<Vec<i32>> {
    if index >= arr.len() {
        return Err(DsaError::IndexOutOfRange { index, len: arr.len() });
    }
    Ok(arr
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, &value)| value)
        .collect())
}

/// Two-pointer swap from both ends.
pub fn reverse_in_place(arr: &mut [i32]) {
    if arr.is_empty() {
        return;
    }
    let (mut start, mut end) = (0, arr.len() - 1);
    while start < end {
        arr.swap(start, end);
        start += 1;
        end -= 1;
    }
}

pub fn rotate_left(arr: &mut [i32], k: usize) {
    if arr.is_empty() {
        return;
    }
    let k = k % arr.len();
    reverse_in_place(&mut arr[..k]);
    reverse_in_place(&mut arr[k..]);
    reverse_in_place(arr);
}

pub fn rotate_right(arr: &mut [i32], k: usize) {
    if arr.is_empty() {
        return;
    }
    let k = k % arr.len();
    reverse_in_place(arr);
    reverse_in_place(&mut arr[..k]);
    reverse_in_place(&mut arr[k..]);
}

/// Non-decreasing order.
pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Largest value strictly below the maximum.
pub fn second_largest(arr: &[i32]) -> Option<i32> {
    let mut first: Option<i32> = None;
    let mut second: Option<i32> = None;
    for &value in arr {
        match first {
            Some(max) if value == max => {}
            Some(max) if value < max => {
                if second.map_or(true, |s| value > s) {
                    second = Some(value);
                }
            }
            _ => {
                second = first;
                first = Some(value);
            }
        }
    }
    second
}

/// Moves zeros to the back while keeping the order of the other values.
pub fn move_zeros_to_end(arr: &mut [i32]) {
    let mut count = 0;
    for i in 0..arr.len() {
        if arr[i] != 0 {
            arr[count] = arr[i];
            count += 1;
        }
    }
    for slot in &mut arr[count..] {
        *slot = 0;
    }
}
