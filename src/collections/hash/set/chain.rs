use std::borrow::Borrow;
use std::iter;

/// An owning link to the next node in a chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a chain. Each node is owned by the link before it.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A bucket: the head of a singly linked chain of elements that hashed to the same index.
pub(crate) struct Chain<T> {
    pub head: Link<T>,
}

impl<T> Chain<T> {
    pub const fn new() -> Chain<T> {
        Chain { head: None }
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns an iterator over the values in the chain, in link order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        iter::successors(self.head(), |node| node.next.as_deref()).map(|node| &node.value)
    }

    /// Links an existing `node` in as the new head of the chain. No allocation takes place.
    pub fn push_node(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Allocates a node for `value` and makes it the new head of the chain.
    pub fn push_front(&mut self, value: T) {
        self.push_node(Box::new(Node { value, next: None }));
    }

    /// Unlinks the head node, returning it with its `next` link cleared.
    pub fn pop_node(&mut self) -> Option<Box<Node<T>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }

    /// Finds the first node in the chain holding a value equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        iter::successors(self.head(), |node| node.next.as_deref())
            .find(|node| node.value.borrow() == key)
    }

    /// Unlinks the node holding a value equal to `key` and returns the value, if there is one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        // Trailing link: walk forward until the link itself owns the matching node (or is empty).
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        Some(removed.value)
    }

    /// Drops every node in the chain, one at a time.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // The default drop would recurse once per node.
        self.clear();
    }
}
