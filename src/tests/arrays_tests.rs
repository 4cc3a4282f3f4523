use crate::algorithms::arrays::*;
use crate::error::DsaError;

#[test]
fn test1_insert_and_delete() {
    assert_eq!(Ok(vec![1, 2, 10, 3]), insert_element(&[1, 2, 3], 2, 10));
    assert_eq!(Ok(vec![1, 2, 3, 10]), insert_element(&[1, 2, 3], 3, 10));
    assert_eq!(Ok(vec![7]), insert_element(&[], 0, 7));
    assert_eq!(
        Err(DsaError::IndexOutOfRange { index: 4, len: 3 }),
        insert_element(&[1, 2, 3], 4, 10)
    );

    assert_eq!(Ok(vec![1, 3]), delete_element(&[1, 2, 3], 1));
    assert_eq!(
        Err(DsaError::IndexOutOfRange { index: 3, len: 3 }),
        delete_element(&[1, 2, 3], 3)
    );
    assert_eq!(
        Err(DsaError::IndexOutOfRange { index: 0, len: 0 }),
        delete_element(&[], 0)
    );
}

#[test]
fn test2_reverse_and_rotate() {
    let mut arr = [1, 2, 0, 4, 0, 5];
    reverse_in_place(&mut arr);
    assert_eq!([5, 0, 4, 0, 2, 1], arr);

    rotate_left(&mut arr, 2);
    assert_eq!([4, 0, 2, 1, 5, 0], arr);
    rotate_right(&mut arr, 2);
    assert_eq!([5, 0, 4, 0, 2, 1], arr);

    rotate_left(&mut arr, 8);
    assert_eq!([4, 0, 2, 1, 5, 0], arr);
    rotate_right(&mut arr, 6);
    assert_eq!([4, 0, 2, 1, 5, 0], arr);

    let mut empty: [i32; 0] = [];
    rotate_left(&mut empty, 3);
    rotate_right(&mut empty, 3);
    reverse_in_place(&mut empty);
}

#[test]
fn test3_is_sorted() {
    assert_eq!(true, is_sorted(&[]));
    assert_eq!(true, is_sorted(&[1, 1, 2, 3]));
    assert_eq!(false, is_sorted(&[1, 3, 2]));
}

#[test]
fn test4_second_largest() {
    assert_eq!(Some(4), second_largest(&[1, 2, 0, 4, 0, 5]));
    assert_eq!(Some(4), second_largest(&[5, 3, 5, 4]));
    assert_eq!(Some(1), second_largest(&[1, 2]));
    assert_eq!(Some(i32::MIN), second_largest(&[i32::MIN, 0]));
    assert_eq!(None, second_largest(&[7, 7, 7]));
    assert_eq!(None, second_largest(&[]));
}

#[test]
fn test5_move_zeros_to_end() {
    let mut arr = [0, 1, 0, 3, 12];
    move_zeros_to_end(&mut arr);
    assert_eq!([1, 3, 12, 0, 0], arr);

    let mut zeros = [0, 0];
    move_zeros_to_end(&mut zeros);
    assert_eq!([0, 0], zeros);
}
