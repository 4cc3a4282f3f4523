use tracing::debug;

use crate::data_structure::linked_stack::LinkedStack;
use crate::data_structure::stack::Stack;
use crate::error::Result;

/// A current value plus the stack of values it replaced.
pub struct History<T> {
    current: T,
    past: LinkedStack<T>,
}

impl<T> History<T> {
    pub fn new(initial: T) -> Self {
        History {
            current: initial,
            past: LinkedStack::new(),
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.past.size()
    }

    pub fn advance(&mut self, next: T) -> Result<()> {
        let previous = std::mem::replace(&mut self.current, next);
        self.past.push(previous)
    }

    /// Restores the previous value. Fails with `EmptyStructure` when there is
    /// nothing to go back to; the current value is kept.
    pub fn rewind(&mut self) -> Result<&T> {
        self.current = self.past.pop()?;
        Ok(&self.current)
    }
}

pub struct TextEditor {
    history: History<String>,
}

impl TextEditor {
    pub fn new() -> Self {
        TextEditor {
            history: History::new(String::new()),
        }
    }

    pub fn text(&self) -> &str {
        self.history.current()
    }

    pub fn append(&mut self, text: &str) -> Result<()> {
        let next = format!("{}{}", self.history.current(), text);
        debug!("append {:?} -> {:?}", text, next);
        self.history.advance(next)
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.rewind().is_ok()
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        TextEditor::new()
    }
}

pub struct Browser {
    history: History<String>,
}

impl Browser {
    pub fn new(home: &str) -> Self {
        Browser {
            history: History::new(home.to_string()),
        }
    }

    pub fn current(&self) -> &str {
        self.history.current()
    }

    pub fn back_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn visit(&mut self, page: &str) -> Result<()> {
        debug!("navigate {} -> {}", self.history.current(), page);
        self.history.advance(page.to_string())
    }

    /// Returns false on the first page.
    pub fn back(&mut self) -> bool {
        self.history.rewind().is_ok()
    }
}
