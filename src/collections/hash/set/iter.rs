use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::{ptr, vec};

use super::HashSet;
use super::chain::{Chain, Node};

/// A cursor over the elements of a [`HashSet`], produced by [`HashSet::iter`],
/// [`HashSet::find`], [`HashSet::insert`] and [`HashSet::end`]. Produces values of type `&T`.
///
/// An Iter always rests on an element or on the end position, which is one past the last bucket.
/// Elements are visited bucket by bucket, each chain in link order. That order says nothing about
/// insertion order and changes whenever the table grows.
///
/// The cursor borrows the set, so the set can't be changed while the cursor is alive.
pub struct Iter<'a, T> {
    pub(crate) buckets: &'a [Chain<T>],
    pub(crate) node: Option<&'a Node<T>>,
    pub(crate) index: usize,
    pub(crate) remaining: usize,
    // Whether `remaining` is exact, rather than an upper bound.
    pub(crate) exact: bool,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a cursor resting on `node` in bucket `index`. If `node` is None, the cursor moves on
    /// to the first element of the next non-empty bucket, or to the end.
    pub(crate) fn new(
        buckets: &'a [Chain<T>],
        node: Option<&'a Node<T>>,
        index: usize,
        remaining: usize,
        exact: bool,
    ) -> Iter<'a, T> {
        let mut iter = Iter {
            buckets,
            node,
            index,
            remaining,
            exact,
        };
        iter.skip_empty();
        iter
    }

    /// Creates a cursor at the end position of `buckets`.
    pub(crate) const fn end(buckets: &'a [Chain<T>]) -> Iter<'a, T> {
        Iter {
            buckets,
            node: None,
            index: buckets.len(),
            remaining: 0,
            exact: true,
        }
    }

    /// Returns the element under the cursor, or None at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.node.map(|node| &node.value)
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn key(&self) -> &'a T {
        match self.node {
            Some(node) => &node.value,
            None => panic!("Attempted to read the element of an Iter at the end position!"),
        }
    }

    /// Returns true if the cursor has moved past the last element.
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves the cursor to the next element, or to the end position. Advancing past the end does
    /// nothing.
    pub fn advance(&mut self) {
        let Some(node) = self.node else {
            return;
        };

        self.node = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        self.skip_empty();
    }

    /// While the cursor isn't on an element, moves to the head of the next bucket. Stops on an
    /// element or with `index == buckets.len()`.
    fn skip_empty(&mut self) {
        while self.node.is_none() && self.index < self.buckets.len() {
            self.index += 1;
            self.node = self.buckets.get(self.index).and_then(Chain::head);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.get()?;
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exact {
            (self.remaining, Some(self.remaining))
        } else {
            (usize::from(!self.is_end()), Some(self.remaining))
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    /// Two cursors are equal if they rest on the same element, or if both are at the end position
    /// of the same set.
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(lhs), Some(rhs)) => ptr::eq(lhs, rhs),
            (None, None) => ptr::eq(self.buckets, other.buckets),
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("index", &self.index)
            .field("current", &self.get())
            .finish()
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            buckets: self.buckets.into_vec().into_iter(),
            current: Chain::new(),
        }
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// Each node is unlinked and released as its element is yielded.
pub struct IntoIter<T> {
    pub(crate) buckets: vec::IntoIter<Chain<T>>,
    pub(crate) current: Chain<T>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current.pop_node() {
                self.len -= 1;
                return Some(node.value);
            }
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
