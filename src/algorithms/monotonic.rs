use crate::data_structure::stack::{ArrayStack, Stack};

/// For each element, the first strictly greater element to its right.
pub fn next_greater_element(nums: &[i32]) -> Vec<Option<i32>> {
    let mut result = vec![None; nums.len()];
    let mut stack: ArrayStack<i32> = ArrayStack::new();

    for (i, &num) in nums.iter().enumerate().rev() {
        while matches!(stack.peek(), Ok(&top) if num >= top) {
            let _ = stack.pop();
        }
        result[i] = stack.peek().ok().copied();
        let _ = stack.push(num);
    }
    result
}

/// Days to wait after each day for a warmer temperature, 0 if none comes.
pub fn daily_temperatures(temperatures: &[i32]) -> Vec<usize> {
    let mut answer = vec![0; temperatures.len()];
    // indices of days still waiting, temperatures non-increasing from bottom
    let mut stack: ArrayStack<usize> = ArrayStack::new();

    for (i, &temperature) in temperatures.iter().enumerate() {
        while let Ok(&waiting) = stack.peek() {
            if temperature <= temperatures[waiting] {
                break;
            }
            let _ = stack.pop();
            answer[waiting] = i - waiting;
        }
        let _ = stack.push(i);
    }
    answer
}
