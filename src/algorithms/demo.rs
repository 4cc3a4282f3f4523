use anyhow::Result;

use crate::algorithms::arrays::*;
use crate::algorithms::expression::{check_balanced, eval_rpn, evaluate_postfix, infix_to_postfix};
use crate::algorithms::history::{Browser, TextEditor};
use crate::algorithms::leetcode::*;
use crate::algorithms::monotonic::{daily_temperatures, next_greater_element};
use crate::algorithms::strings::*;

pub fn stack_applications() -> Result<()> {
    println!("1. CHECKING BALANCED PARENTHESES");
    for expression in ["(a+b)*{c-d}", "(a+b))*c", "((a+b)*(c-d)", "()[]{}", "([)]"] {
        match check_balanced(expression) {
            Ok(()) => println!("{:<16} balanced", expression),
            Err(e) => println!("{:<16} {}", expression, e),
        }
    }

    println!("\n2. INFIX TO POSTFIX CONVERSION");
    for infix in ["a+b*c", "(a+b)*(c-d)", "(a+b"] {
        println!("{:<16} {:?}", infix, infix_to_postfix(infix));
    }

    println!("\n3. POSTFIX EXPRESSION EVALUATION");
    for postfix in ["23+4*", "234*+", "2+"] {
        println!("{:<16} {:?}", postfix, evaluate_postfix(postfix));
    }

    println!("\n4. REVERSE POLISH NOTATION");
    let rpn: [&[&str]; 3] = [
        &["2", "1", "+", "3", "*"],
        &["4", "13", "5", "/", "+"],
        &["10", "6", "9", "3", "+", "-11", "*", "/", "*", "17", "+", "5", "+"],
    ];
    for tokens in rpn {
        println!("{:?} -> {:?}", tokens, eval_rpn(tokens));
    }

    println!("\n5. NEXT GREATER ELEMENT / DAILY TEMPERATURES");
    for nums in [vec![4, 5, 2, 25], vec![13, 7, 6, 12], vec![1, 2, 3, 4, 5]] {
        println!("{:?} -> {:?}", nums, next_greater_element(&nums));
    }
    for temps in [vec![73, 74, 75, 71, 69, 72, 76, 73], vec![30, 40, 50, 60], vec![30, 60, 90]] {
        println!("{:?} -> {:?}", temps, daily_temperatures(&temps));
    }

    println!("\n6. UNDO FUNCTIONALITY");
    let mut editor = TextEditor::new();
    for text in ["Hello", " World", "! How are you?"] {
        editor.append(text)?;
        println!("Added: {:?}\tCurrent text: {:?}", text, editor.text());
    }
    for _ in 0..2 {
        editor.undo();
        println!("Undo\t\tCurrent text: {:?}", editor.text());
    }
    editor.append(" Universe!")?;
    println!("Added: \" Universe!\"\tCurrent text: {:?}", editor.text());

    println!("\n7. BROWSER HISTORY NAVIGATION");
    let mut browser = Browser::new("Home Page");
    for page in ["Search Results", "Product Page", "Shopping Cart", "Checkout"] {
        browser.visit(page)?;
        println!("Navigated to: {}", browser.current());
    }
    for _ in 0..2 {
        browser.back();
        println!("Went back to: {}", browser.current());
    }
    browser.visit("About Us")?;
    println!("Navigated to: {}", browser.current());
    for _ in 0..4 {
        if browser.back() {
            println!("Went back to: {}", browser.current());
        } else {
            println!("Can't go back. This is the first page.");
        }
    }
    Ok(())
}

pub fn arrays() -> Result<()> {
    let mut arr = vec![1, 2, 0, 4, 0, 5];
    println!("Original array: {:?}", arr);

    reverse_in_place(&mut arr);
    println!("Reversed:       {:?}", arr);
    rotate_left(&mut arr, 2);
    println!("Rotate left 2:  {:?}", arr);
    rotate_right(&mut arr, 2);
    println!("Rotate right 2: {:?}", arr);
    println!("Second largest: {:?}", second_largest(&arr));
    move_zeros_to_end(&mut arr);
    println!("Zeros to end:   {:?}", arr);
    println!("Is sorted:      {}", is_sorted(&arr));

    let arr = insert_element(&arr, 2, 10)?;
    println!("Insert 10 at 2: {:?}", arr);
    let arr = delete_element(&arr, 3)?;
    println!("Delete at 3:    {:?}", arr);
    println!("Delete at 9:    {:?}", delete_element(&arr, 9));
    Ok(())
}

pub fn strings() -> Result<()> {
    let s = "hello world";
    println!("Original string:   {}", s);
    println!("Reversed:          {}", reverse_string(s));
    println!("Is palindrome:     {}", is_palindrome(s));
    let count = count_letters(s);
    println!("Vowels:            {}", count.vowels);
    println!("Consonants:        {}", count.consonants);
    println!("Remove duplicates: {}", remove_duplicate_chars(s));
    println!("Title case:        {}", to_title_case(s));
    println!("Character frequency:");
    for (c, n) in character_frequency(s) {
        println!("  {:?}: {}", c, n);
    }
    Ok(())
}

pub fn leetcode() -> Result<()> {
    println!("42. Trapping Rain Water");
    for heights in [vec![4, 2, 0, 6, 3, 2, 5], vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]] {
        println!("  {:?} -> {}", heights, trap_rain_water(&heights));
    }

    println!("\n88. Merge Sorted Array");
    let mut nums1 = vec![1, 2, 3, 0, 0, 0];
    merge_sorted(&mut nums1, 3, &[2, 5, 6], 3)?;
    println!("  merged: {:?}", nums1);
    let mut nums1 = vec![4, 5, 6, 0, 0, 0];
    merge_sorted(&mut nums1, 3, &[1, 2, 3], 3)?;
    println!("  merged: {:?}", nums1);

    println!("\n136. Single Number");
    for nums in [vec![2, 2, 1], vec![4, 1, 2, 1, 2], vec![1], vec![-1, -1, -2]] {
        println!(
            "  {:?} -> {} (by count: {:?})",
            nums,
            single_number(&nums),
            single_number_by_count(&nums)
        );
    }

    println!("\n169. Majority Element");
    for nums in [vec![3, 3, 4], vec![2, 2, 1, 1, 1, 2, 2], vec![6, 5, 5, 5, 5, 5, 5]] {
        println!(
            "  {:?} -> brute {:?}, hashing {:?}, moore {:?}",
            nums,
            majority_element_brute(&nums),
            majority_element_hashing(&nums),
            majority_element_moore(&nums)
        );
    }

    println!("\n387. First Unique Character");
    for s in ["leetcode", "loveleetcode", "aabb", "", "aaabcccdeeef"] {
        println!("  {:?} -> {:?}", s, first_unique_char(s));
    }

    println!("\n2965. Missing and Repeated Values");
    for arr in [vec![3, 1, 2, 5, 3], vec![1, 2, 2, 4], vec![1, 1], vec![4, 3, 6, 2, 1, 1]] {
        println!(
            "  {:?} -> hashing {:?}, math {:?}",
            arr,
            find_missing_repeating_hashing(&arr)?,
            find_missing_repeating_math(&arr)?
        );
    }
    Ok(())
}
