use std::collections::{BTreeMap, HashSet};

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.iter().eq(chars.iter().rev())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCount {
    pub vowels: usize,
    pub consonants: usize,
}

/// Counts alphabetic characters only, ignoring case.
pub fn count_letters(s: &str) -> LetterCount {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .fold(LetterCount::default(), |mut count, c| {
            if "aeiou".contains(c.to_ascii_lowercase()) {
                count.vowels += 1;
            } else {
                count.consonants += 1;
            }
            count
        })
}

/// Keeps the first occurrence of every character.
pub fn remove_duplicate_chars(s: &str) -> String {
    let mut seen = HashSet::new();
    s.chars().filter(|&c| seen.insert(c)).collect()
}

pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn character_frequency(s: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in s.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}
