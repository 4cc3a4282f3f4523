use crate::data_structure::stack::{ArrayStack, Stack};
use crate::error::Result;

/// FIFO queue built from two stacks. Elements move from `inbox` to `outbox`
/// only when `outbox` runs dry, so each element moves at most once.
#[derive(Debug, Clone, Default)]
pub struct StackQueue<T> {
    inbox: ArrayStack<T>,
    outbox: ArrayStack<T>,
}

impl<T> StackQueue<T> {
    pub fn new() -> Self {
        StackQueue {
            inbox: ArrayStack::new(),
            outbox: ArrayStack::new(),
        }
    }

    pub fn push(&mut self, data: T) -> Result<()> {
        self.inbox.push(data)
    }

    pub fn pop(&mut self) -> Result<T> {
        self.shift()?;
        self.outbox.pop()
    }

    pub fn peek(&mut self) -> Result<&T> {
        self.shift()?;
        self.outbox.peek()
    }

    pub fn len(&self) -> usize {
        self.inbox.size() + self.outbox.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    fn shift(&mut self) -> Result<()> {
        if self.outbox.is_empty() {
            while !self.inbox.is_empty() {
                let data = self.inbox.pop()?;
                self.outbox.push(data)?;
            }
        }
        Ok(())
    }
}
