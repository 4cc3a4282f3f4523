//! Singly linked list of `i32` with head/tail tracking.
//!
//! Nodes live in an arena owned by the list and link to each other by slot
//! index, so cycles can be installed (see [`LinkedList::link_tail_to`]) and
//! detected without self-referential pointers. Slots freed by removals are
//! reused by later insertions.
//!
//! Every traversal is bounded by the element count, which keeps read-only
//! operations finite while a cycle is installed. Restructuring operations
//! reset the tail link before they start, dropping any installed cycle.
//!
//! The list has no internal synchronization; share it between threads behind
//! one lock per instance.

use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::error::{DsaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    data: i32,
    next: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

pub struct Iter<'a> {
    list: &'a LinkedList,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        self.remaining -= 1;
        self.next = self.list.next(id);
        Some(self.list.data(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn first(&self) -> Option<i32> {
        self.head.map(|id| self.data(id))
    }

    pub fn last(&self) -> Option<i32> {
        self.tail.map(|id| self.data(id))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.size,
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Inserts at the front in O(1).
    pub fn add_first(&mut self, data: i32) {
        let id = self.alloc(data);
        let head = self.head;
        self.set_next(id, head);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.size += 1;
        trace!("add_first {} (size {})", data, self.size);
    }

    /// Inserts at the back in O(1).
    pub fn add_last(&mut self, data: i32) {
        let id = self.alloc(data);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
        trace!("add_last {} (size {})", data, self.size);
    }

    /// Inserts `data` before the element currently at `index`.
    /// `index == len()` appends.
    pub fn add(&mut self, index: usize, data: i32) -> Result<()> {
        if index > self.size {
            return Err(DsaError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }
        if index == 0 {
            self.add_first(data);
            return Ok(());
        }
        if index == self.size {
            self.add_last(data);
            return Ok(());
        }

        let previous = self.node_at(index - 1).ok_or(DsaError::IndexOutOfRange {
            index,
            len: self.size,
        })?;
        let id = self.alloc(data);
        let after = self.next(previous);
        self.set_next(id, after);
        self.set_next(previous, Some(id));
        self.size += 1;
        trace!("add {} at {} (size {})", data, index, self.size);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<i32> {
        self.seal_tail();
        let head = self.head.ok_or(DsaError::EmptyStructure)?;
        let data = self.data(head);
        if self.size == 1 {
            self.head = None;
            self.tail = None;
        } else {
            self.head = self.next(head);
        }
        self.release(head);
        self.size -= 1;
        trace!("remove_first {} (size {})", data, self.size);
        Ok(data)
    }

    /// Removes the tail. O(n): the predecessor has to be found from the head.
    pub fn remove_last(&mut self) -> Result<i32> {
        self.seal_tail();
        let tail = self.tail.ok_or(DsaError::EmptyStructure)?;
        let data = self.data(tail);
        if self.size == 1 {
            self.head = None;
            self.tail = None;
        } else if let Some(previous) = self.node_at(self.size - 2) {
            self.set_next(previous, None);
            self.tail = Some(previous);
        }
        self.release(tail);
        self.size -= 1;
        trace!("remove_last {} (size {})", data, self.size);
        Ok(data)
    }

    pub fn iterative_search(&self, key: i32) -> Result<usize> {
        self.iter()
            .position(|data| data == key)
            .ok_or(DsaError::NotFound { key })
    }

    /// Same contract as [`LinkedList::iterative_search`]; recursion depth is
    /// the index of the match.
    pub fn recursive_search(&self, key: i32) -> Result<usize> {
        self.search_from(self.head, key, self.size)
            .ok_or(DsaError::NotFound { key })
    }

    fn search_from(&self, current: Option<NodeId>, key: i32, remaining: usize) -> Option<usize> {
        let id = current.filter(|_| remaining > 0)?;
        if self.data(id) == key {
            return Some(0);
        }
        self.search_from(self.next(id), key, remaining - 1)
            .map(|index| index + 1)
    }

    /// Reverses the links in place; head and tail swap roles.
    pub fn reverse(&mut self) {
        self.seal_tail();
        let old_head = self.head;
        self.head = self.reverse_chain(old_head);
        self.tail = old_head;
        debug!("reversed list of {} nodes", self.size);
    }

    /// Removes the `n`-th node counted from the end (1-based) and returns its
    /// value.
    pub fn delete_nth_from_end(&mut self, n: usize) -> Result<i32> {
        self.seal_tail();
        if self.is_empty() {
            return Err(DsaError::EmptyStructure);
        }

        let length = self.iter().count();
        if n == 0 || n > length {
            return Err(DsaError::IndexOutOfRange { index: n, len: length });
        }
        if n == length {
            return self.remove_first();
        }

        let out_of_range = DsaError::IndexOutOfRange { index: n, len: length };
        let previous = self.node_at(length - n - 1).ok_or(out_of_range.clone())?;
        let target = self.next(previous).ok_or(out_of_range)?;
        let data = self.data(target);
        let after = self.next(target);
        self.set_next(previous, after);
        if self.tail == Some(target) {
            self.tail = Some(previous);
        }
        self.release(target);
        self.size -= 1;
        debug!("deleted {} ({} from end)", data, n);
        Ok(data)
    }

    /// Reverses the second half in place, compares it against the first
    /// half, then reverses it back. The list is unchanged afterwards.
    pub fn is_palindrome(&mut self) -> bool {
        self.seal_tail();
        let Some(head) = self.head else {
            return true;
        };
        if self.size == 1 {
            return true;
        }

        let middle = self.walk_slow_fast(head, Some(head));
        let reversed = self.reverse_chain(Some(middle));

        let mut palindrome = true;
        let mut left_cursor = Some(head);
        let mut right_cursor = reversed;
        while let (Some(left), Some(right)) = (left_cursor, right_cursor) {
            if self.data(left) != self.data(right) {
                palindrome = false;
                break;
            }
            left_cursor = self.next(left);
            right_cursor = self.next(right);
        }

        self.reverse_chain(reversed);
        palindrome
    }

    /// Floyd's cycle detection.
    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Breaks the cycle, if any, by severing the link into its entry node.
    /// Returns whether a cycle was found.
    pub fn remove_cycle(&mut self) -> bool {
        let Some(meeting) = self.meeting_point() else {
            return false;
        };
        let Some(head) = self.head else {
            return false;
        };

        // Equal distances: head -> entry and meeting point -> entry.
        let mut slow = head;
        let mut fast = meeting;
        while slow != fast {
            match (self.next(slow), self.next(fast)) {
                (Some(s), Some(f)) => {
                    slow = s;
                    fast = f;
                }
                _ => return false,
            }
        }

        let entry = slow;
        let mut last = entry;
        while let Some(next) = self.next(last).filter(|&next| next != entry) {
            last = next;
        }
        self.set_next(last, None);
        self.tail = Some(last);
        debug!("removed cycle entering at value {}", self.data(entry));
        true
    }

    /// Points the tail's link at the node at `index`, installing a cycle.
    pub fn link_tail_to(&mut self, index: usize) -> Result<()> {
        let tail = self.tail.ok_or(DsaError::EmptyStructure)?;
        let target = self.node_at(index).ok_or(DsaError::IndexOutOfRange {
            index,
            len: self.size,
        })?;
        self.set_next(tail, Some(target));
        debug!("linked tail to index {}", index);
        Ok(())
    }

    /// Stable merge sort over the links; ties keep their original order.
    pub fn merge_sort(&mut self) {
        self.seal_tail();
        let head = self.head;
        self.head = self.merge_sort_from(head);
        self.relocate_tail();
        debug!("merge sorted {} nodes", self.size);
    }

    fn merge_sort_from(&mut self, start: Option<NodeId>) -> Option<NodeId> {
        let start = start?;
        if self.next(start).is_none() {
            return Some(start);
        }

        let middle = self.walk_slow_fast(start, self.next(start));
        let right = self.next(middle);
        self.set_next(middle, None);

        let sorted_left = self.merge_sort_from(Some(start));
        let sorted_right = self.merge_sort_from(right);
        self.merge(sorted_left, sorted_right)
    }

    fn merge(&mut self, mut left: Option<NodeId>, mut right: Option<NodeId>) -> Option<NodeId> {
        let mut head = None;
        let mut current: Option<NodeId> = None;
        loop {
            let picked = match (left, right) {
                (Some(l), Some(r)) => {
                    if self.data(l) <= self.data(r) {
                        left = self.next(l);
                        l
                    } else {
                        right = self.next(r);
                        r
                    }
                }
                (Some(rest), None) | (None, Some(rest)) => {
                    match current {
                        Some(c) => self.set_next(c, Some(rest)),
                        None => head = Some(rest),
                    }
                    return head;
                }
                (None, None) => return head,
            };
            match current {
                Some(c) => self.set_next(c, Some(picked)),
                None => head = Some(picked),
            }
            current = Some(picked);
        }
    }

    /// Reorders `a1 a2 .. an` into `a1 an a2 an-1 ..`.
    pub fn zig_zag(&mut self) {
        self.seal_tail();
        let Some(head) = self.head else {
            return;
        };

        let middle = self.walk_slow_fast(head, self.next(head));
        let second_half = self.next(middle);
        self.set_next(middle, None);

        let mut left = Some(head);
        let mut right = self.reverse_chain(second_half);
        while let (Some(l), Some(r)) = (left, right) {
            let next_left = self.next(l);
            let next_right = self.next(r);
            self.set_next(l, Some(r));
            self.set_next(r, next_left);
            left = next_left;
            right = next_right;
        }

        self.relocate_tail();
        debug!("zig-zagged {} nodes", self.size);
    }

    fn alloc(&mut self, data: i32) -> NodeId {
        let node = Node { data, next: None };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id.0].next = None;
        self.free.push(id);
    }

    fn data(&self, id: NodeId) -> i32 {
        self.nodes[id.0].data
    }

    fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.size {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..index {
            current = self.next(current)?;
        }
        Some(current)
    }

    /// Advances `slow` one link and `fast` two links until `fast` runs out;
    /// returns where `slow` stopped.
    fn walk_slow_fast(&self, mut slow: NodeId, mut fast: Option<NodeId>) -> NodeId {
        while let Some(ahead) = fast.and_then(|f| self.next(f)) {
            match self.next(slow) {
                Some(next) => slow = next,
                None => break,
            }
            fast = self.next(ahead);
        }
        slow
    }

    fn meeting_point(&self) -> Option<NodeId> {
        let mut slow = self.head?;
        let mut fast = self.head?;
        loop {
            fast = self.next(fast).and_then(|f| self.next(f))?;
            slow = self.next(slow)?;
            if slow == fast {
                return Some(slow);
            }
        }
    }

    /// Reverses an acyclic chain and returns its new first node.
    fn reverse_chain(&mut self, start: Option<NodeId>) -> Option<NodeId> {
        let mut previous = None;
        let mut current = start;
        while let Some(id) = current {
            current = self.next(id);
            self.set_next(id, previous);
            previous = Some(id);
        }
        previous
    }

    fn relocate_tail(&mut self) {
        self.tail = match self.head {
            Some(_) => self.node_at(self.size - 1),
            None => None,
        };
    }

    fn seal_tail(&mut self) {
        if let Some(tail) = self.tail {
            if self.next(tail).is_some() {
                debug!("dropping cycle through tail");
                self.set_next(tail, None);
            }
        }
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for data in iter {
            list.add_last(data);
        }
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.iter() {
            write!(f, "{}->", data)?;
        }
        write!(f, "null")
    }
}
