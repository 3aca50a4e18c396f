use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A value that records its own drop in a shared counter. Equality and hashing only look at `id`,
/// so these can be stored in a set.
#[derive(Debug)]
pub struct DropCounter {
    /// Identifies the value within a set.
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Creates a value sharing the provided counter.
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> DropCounter {
        DropCounter {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        DropCounter::new(self.id, &self.drops)
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DropCounter {}

impl Hash for DropCounter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
