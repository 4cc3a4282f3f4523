use crate::data_structure::linked_stack::LinkedStack;
use crate::data_structure::min_stack::MinStack;
use crate::data_structure::stack::{ArrayStack, BoundedStack, Stack};
use crate::data_structure::stack_queue::StackQueue;
use crate::error::DsaError;

fn check_lifo(stack: &mut dyn Stack<i32>) {
    assert_eq!(true, stack.is_empty());
    assert_eq!("Stack is Empty", stack.display());
    for value in 1..=4 {
        stack.push(value).unwrap();
    }
    assert_eq!(4, stack.size());
    assert_eq!(Ok(&4), stack.peek());
    assert_eq!(vec![4, 3, 2, 1], stack.iter().copied().collect::<Vec<_>>());
    assert_eq!("Stack (Top to Bottom): 4 -> 3 -> 2 -> 1", stack.display());

    assert_eq!(Ok(4), stack.pop());
    assert_eq!(Ok(3), stack.pop());
    assert_eq!(Ok(&2), stack.peek());
    assert_eq!(Ok(2), stack.pop());
    assert_eq!(Ok(1), stack.pop());
    assert_eq!(Err(DsaError::EmptyStructure), stack.pop());
    assert_eq!(Err(DsaError::EmptyStructure), stack.peek());
    assert_eq!(0, stack.size());
}

#[test]
fn test1_array_stack() {
    check_lifo(&mut ArrayStack::<i32>::new());
}

#[test]
fn test2_linked_stack() {
    check_lifo(&mut LinkedStack::<i32>::new());
}

#[test]
fn test3_bounded_stack() {
    check_lifo(&mut BoundedStack::<i32>::default());

    let mut stack = BoundedStack::with_capacity(2);
    stack.push('a').unwrap();
    stack.push('b').unwrap();
    assert_eq!(true, stack.is_full());
    assert_eq!(Err(DsaError::Overflow { capacity: 2 }), stack.push('c'));
    assert_eq!(2, stack.size());
    assert_eq!(Ok(&'b'), stack.peek());
}

#[test]
fn test4_bounded_stack_render() {
    let mut stack = BoundedStack::with_capacity(3);
    stack.push(1).unwrap();
    stack.push(2).unwrap();

    let plain = "  +---+\n  |   |\n  +---+\n  | 2 |\n  +---+\n  | 1 |\n  +---+\n  =====\n  Stack";
    assert_eq!(plain, stack.render(false));

    let highlighted = "  +---+\n  |   |\n  +---+\n->| 2 |<- (Top)\n  +---+\n  | 1 |\n  +---+\n  =====\n  Stack";
    assert_eq!(highlighted, stack.render(true));
}

#[test]
fn test5_linked_stack_into_iter_and_long_drop() {
    let mut stack = LinkedStack::new();
    for value in 0..3 {
        stack.push(value).unwrap();
    }
    assert_eq!(vec![2, 1, 0], stack.into_iter().collect::<Vec<_>>());

    let mut long = LinkedStack::new();
    for value in 0..200_000 {
        long.push(value).unwrap();
    }
    assert_eq!(200_000, long.size());
    drop(long);
}

#[test]
fn test6_min_stack() {
    let mut stack = MinStack::new();
    stack.push(-2).unwrap();
    stack.push(0).unwrap();
    stack.push(-3).unwrap();
    assert_eq!(Ok(&-3), stack.min());
    assert_eq!(Ok(-3), stack.pop());
    assert_eq!(Ok(&0), stack.top());
    assert_eq!(Ok(&-2), stack.min());
}

#[test]
fn test7_min_stack_duplicate_minimums() {
    let mut stack = MinStack::new();
    stack.push(1).unwrap();
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    assert_eq!(Ok(2), stack.pop());
    assert_eq!(Ok(1), stack.pop());
    assert_eq!(Ok(&1), stack.min());
    assert_eq!(Ok(1), stack.pop());
    assert_eq!(true, stack.is_empty());
    assert_eq!(Err(DsaError::EmptyStructure), stack.min());
    assert_eq!(Err(DsaError::EmptyStructure), stack.pop());
}

#[test]
fn test8_stack_queue() {
    let mut queue = StackQueue::new();
    queue.push(1).unwrap();
    queue.push(2).unwrap();
    assert_eq!(Ok(&1), queue.peek());
    assert_eq!(Ok(1), queue.pop());
    assert_eq!(false, queue.is_empty());

    queue.push(3).unwrap();
    assert_eq!(2, queue.len());
    assert_eq!(Ok(2), queue.pop());
    assert_eq!(Ok(3), queue.pop());
    assert_eq!(true, queue.is_empty());
    assert_eq!(Err(DsaError::EmptyStructure), queue.pop());
    assert_eq!(Err(DsaError::EmptyStructure), queue.peek());
}
