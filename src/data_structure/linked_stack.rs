use tracing::trace;

use crate::data_structure::stack::Stack;
use crate::error::{DsaError, Result};

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Stack over singly linked boxed nodes; the head is the top.
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

pub struct IntoIter<T>(LinkedStack<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop().ok()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        LinkedStack {
            head: None,
            size: 0,
        }
    }

    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        LinkedStack::new()
    }
}

// Unlink node by node so long stacks don't recurse through Box drops.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, data: T) -> Result<()> {
        self.head = Some(Box::new(Node { data, next: self.head.take() }));
        self.size += 1;
        trace!("linked stack push (size {})", self.size);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.head.take().map(|x| {
            self.head = x.next;
            self.size -= 1;
            x.data
        }).ok_or(DsaError::EmptyStructure)
    }

    fn peek(&self) -> Result<&T> {
        self.head.as_ref().map(|x| &x.data).ok_or(DsaError::EmptyStructure)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(Iter { next: self.head.as_deref() })
    }
}
