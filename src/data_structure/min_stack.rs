use crate::data_structure::stack::{ArrayStack, Stack};
use crate::error::Result;

/// Stack answering `min` in O(1) by keeping a second stack of running minima.
#[derive(Debug, Clone, Default)]
pub struct MinStack<T> {
    stack: ArrayStack<T>,
    minimums: ArrayStack<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        MinStack {
            stack: ArrayStack::new(),
            minimums: ArrayStack::new(),
        }
    }

    pub fn push(&mut self, data: T) -> Result<()> {
        // Equal values are pushed too, so popping one duplicate keeps the other.
        let is_new_min = match self.minimums.peek() {
            Ok(min) => data <= *min,
            Err(_) => true,
        };
        if is_new_min {
            self.minimums.push(data.clone())?;
        }
        self.stack.push(data)
    }

    pub fn pop(&mut self) -> Result<T> {
        let top = self.stack.pop()?;
        if matches!(self.minimums.peek(), Ok(min) if *min == top) {
            self.minimums.pop()?;
        }
        Ok(top)
    }

    pub fn top(&self) -> Result<&T> {
        self.stack.peek()
    }

    pub fn min(&self) -> Result<&T> {
        self.minimums.peek()
    }

    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
