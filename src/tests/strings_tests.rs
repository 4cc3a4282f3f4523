use std::collections::BTreeMap;

use crate::algorithms::strings::*;

#[test]
fn test1_reverse_and_palindrome() {
    assert_eq!("dlrow olleh", reverse_string("hello world"));
    assert_eq!("", reverse_string(""));
    assert_eq!(false, is_palindrome("hello world"));
    assert_eq!(true, is_palindrome("racecar"));
    assert_eq!(true, is_palindrome("abba"));
    assert_eq!(true, is_palindrome(""));
}

#[test]
fn test2_count_letters() {
    assert_eq!(LetterCount { vowels: 3, consonants: 7 }, count_letters("hello world"));
    assert_eq!(LetterCount { vowels: 2, consonants: 1 }, count_letters("A-e 1 Z!"));
    assert_eq!(LetterCount::default(), count_letters("123 !?"));
}

#[test]
fn test3_remove_duplicate_chars() {
    assert_eq!("helo wrd", remove_duplicate_chars("hello world"));
    assert_eq!("ab", remove_duplicate_chars("aabbab"));
}

#[test]
fn test4_title_case() {
    assert_eq!("Hello World", to_title_case("hello world"));
    assert_eq!("Rust Is Fun", to_title_case("  rUST   is FUN "));
    assert_eq!("", to_title_case(""));
}

#[test]
fn test5_character_frequency() {
    let expected: BTreeMap<char, usize> =
        [(' ', 1), ('d', 1), ('e', 1), ('h', 1), ('l', 3), ('o', 2), ('r', 1), ('w', 1)]
            .into_iter()
            .collect();
    assert_eq!(expected, character_frequency("hello world"));
    assert_eq!(true, character_frequency("").is_empty());
}
