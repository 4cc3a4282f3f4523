use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data_structure::linked_list::LinkedList;
use crate::data_structure::linked_stack::LinkedStack;
use crate::data_structure::min_stack::MinStack;
use crate::data_structure::stack::{ArrayStack, BoundedStack, Stack};
use crate::data_structure::stack_queue::StackQueue;

pub fn linked_list(seed: u64, len: usize) -> Result<()> {
    let mut list = LinkedList::new();

    println!("Adding elements to the list:");
    list.add_first(2);
    list.add_first(1);
    list.add_last(3);
    list.add_last(4);
    println!("{}", list);
    println!("Size: {}", list.len());

    println!("\nAdding element at index 2:");
    list.add(2, 10)?;
    println!("{}", list);

    println!("\nSearching for elements:");
    for key in [10, 5] {
        println!("{} (iterative): {:?}", key, list.iterative_search(key));
        println!("{} (recursive): {:?}", key, list.recursive_search(key));
    }

    println!("\nRemoving elements:");
    println!("Removed first element: {}", list.remove_first()?);
    println!("{}", list);
    println!("Removed last element: {}", list.remove_last()?);
    println!("{}", list);

    println!("\nReversing the list:");
    list.reverse();
    println!("{}", list);

    println!("\nDeleting 2nd node from end:");
    list.delete_nth_from_end(2)?;
    println!("{}", list);
    println!("Deleting 5th node from end: {:?}", list.delete_nth_from_end(5));

    println!("\nTesting palindrome check:");
    let mut palindrome: LinkedList = [1, 2, 2, 1].into_iter().collect();
    println!("{}", palindrome);
    println!("Is palindrome: {}", palindrome.is_palindrome());

    println!("\nTesting merge sort:");
    let mut values: Vec<i32> = (1..=len as i32).collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    let mut unsorted: LinkedList = values.into_iter().collect();
    println!("Before sorting: {}", unsorted);
    unsorted.merge_sort();
    println!("After sorting:  {}", unsorted);

    println!("\nTesting zigzag rearrangement:");
    let mut zigzag: LinkedList = (1..=5).collect();
    println!("Before zigzag: {}", zigzag);
    zigzag.zig_zag();
    println!("After zigzag:  {}", zigzag);

    println!("\nTesting cycle detection:");
    let mut cyclic: LinkedList = (1..=5).collect();
    println!("Has cycle: {}", cyclic.has_cycle());
    cyclic.link_tail_to(2)?;
    println!("After linking tail to index 2, has cycle: {}", cyclic.has_cycle());
    println!("Removed cycle: {}", cyclic.remove_cycle());
    println!("Has cycle: {} -> {}", cyclic.has_cycle(), cyclic);

    Ok(())
}

fn exercise(name: &str, stack: &mut dyn Stack<i32>) -> Result<()> {
    println!("===== Stack Implementation using {} =====\n", name);
    for value in 1..=4 {
        stack.push(value)?;
        println!("{} pushed to stack", value);
    }
    println!("\nCurrent stack:");
    println!("{}", stack.display());
    println!("Size: {}", stack.size());
    println!("\nTop element: {}", stack.peek()?);

    println!("\nPopping elements:");
    while let Ok(value) = stack.pop() {
        println!("{} popped from stack", value);
        if let Ok(top) = stack.peek() {
            println!("Current top: {}", top);
        }
    }
    println!("\nTrying to pop from empty stack: {:?}", stack.pop());
    println!("Stack size: {}\n", stack.size());
    Ok(())
}

pub fn stacks() -> Result<()> {
    exercise("ArrayList", &mut ArrayStack::<i32>::new())?;
    exercise("Linked List", &mut LinkedStack::<i32>::new())?;

    println!("===== Bounded stack =====\n");
    let mut bounded: BoundedStack<i32> = BoundedStack::default();
    for frame in 1..=4 {
        bounded.push(frame)?;
    }
    println!("{}\n", bounded.render(true));
    bounded.push(5)?;
    println!("Pushing past capacity: {:?}", bounded.push(6));
    while bounded.pop().is_ok() {}
    println!("{}\n", bounded.render(false));

    println!("===== Min stack =====\n");
    let mut min_stack = MinStack::new();
    for value in [-2, 0, -3] {
        min_stack.push(value)?;
    }
    println!("min() -> {}", min_stack.min()?);
    min_stack.pop()?;
    println!("pop(); top() -> {}", min_stack.top()?);
    println!("min() -> {}", min_stack.min()?);

    println!("\n===== Queue using stacks =====\n");
    let mut queue = StackQueue::new();
    queue.push(1)?;
    queue.push(2)?;
    println!("peek() -> {}", queue.peek()?);
    println!("pop() -> {}", queue.pop()?);
    println!("is_empty() -> {}", queue.is_empty());
    Ok(())
}
