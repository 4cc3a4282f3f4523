use std::fmt::{self, Write};

use tracing::trace;

use crate::error::{DsaError, Result};

/// LIFO container of `T`. Iteration runs from top to bottom.
pub trait Stack<T> {
    fn push(&mut self, data: T) -> Result<()>;

    fn pop(&mut self) -> Result<T>;

    fn peek(&self) -> Result<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn display(&self) -> String
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return String::from("Stack is Empty");
        }
        let items: Vec<String> = self.iter().map(|data| data.to_string()).collect();
        format!("Stack (Top to Bottom): {}", items.join(" -> "))
    }
}

/// Stack over a growable array; push is amortized O(1).
#[derive(Debug, Clone, Default)]
pub struct ArrayStack<T> {
    elements: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        ArrayStack {
            elements: Vec::new(),
        }
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, data: T) -> Result<()> {
        self.elements.push(data);
        trace!("array stack push (size {})", self.elements.len());
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or(DsaError::EmptyStructure)
    }

    fn peek(&self) -> Result<&T> {
        self.elements.last().ok_or(DsaError::EmptyStructure)
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.elements.iter().rev())
    }
}

pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity stack that can draw itself as an ASCII column.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedStack {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Draws every slot from the top of the capacity down to the base.
    pub fn render(&self, highlight_top: bool) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::from("  +---+\n");
        let top = self.elements.len().checked_sub(1);
        for slot in (0..self.capacity).rev() {
            match self.elements.get(slot) {
                Some(data) if highlight_top && Some(slot) == top => {
                    let _ = writeln!(out, "->| {} |<- (Top)", data);
                }
                Some(data) => {
                    let _ = writeln!(out, "  | {} |", data);
                }
                None => out.push_str("  |   |\n"),
            }
            out.push_str("  +---+\n");
        }
        out.push_str("  =====\n");
        out.push_str("  Stack");
        out
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        BoundedStack::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> Stack<T> for BoundedStack<T> {
    fn push(&mut self, data: T) -> Result<()> {
        if self.is_full() {
            return Err(DsaError::Overflow {
                capacity: self.capacity,
            });
        }
        self.elements.push(data);
        trace!("bounded stack push ({}/{})", self.elements.len(), self.capacity);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or(DsaError::EmptyStructure)
    }

    fn peek(&self) -> Result<&T> {
        self.elements.last().ok_or(DsaError::EmptyStructure)
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.elements.iter().rev())
    }
}
