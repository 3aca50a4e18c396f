use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{io, iter, mem};

use tracing::{debug, trace};

use super::chain::{Chain, Node};
use super::{AllocFailure, CapacityOverflow, Iter, ReserveError, SetConfig};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A set of unique elements, where each element is its own key, relying on the elements
/// implementing [`Hash`] and [`Eq`].
///
/// Collisions are resolved by separate chaining: the table is an array of buckets, each owning a
/// singly linked chain of the elements that hashed to it. The table grows (roughly doubling) before
/// an insertion would push the ratio of elements to buckets above the configured max load factor.
/// It never shrinks, except when [`clear`](HashSet::clear) resets it to its minimum capacity.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set. Because of this, the API provides no mutable access to elements.
///
/// The canonical hasher is [`RandomState`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the HashSet.
/// - `c`: The length of the chain being searched.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `contains/count/get/find` | `O(c)` |
/// | `erase/take` | `O(c)` |
/// | `reserve/rehash` | `O(n)`, `O(1)`** |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// With a decent hash and the default load factor, `c` stays small and these are `O(1)` in the
/// expected case.
///
/// \* If the table has to grow for the new element, `insert` takes `O(n)`.
///
/// \** If the table can already hold the requested number of elements, `reserve` is `O(1)`.
pub struct HashSet<T, S = RandomState> {
    pub(crate) buckets: Box<[Chain<T>]>,
    pub(crate) len: usize,
    pub(crate) config: SetConfig,
    pub(crate) hasher: S,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet with the default [`SetConfig`].
    pub fn new() -> HashSet<T> {
        HashSet::with_config(SetConfig::default())
    }

    /// Creates a new, empty HashSet with the provided `config`.
    pub fn with_config(config: SetConfig) -> HashSet<T> {
        HashSet::with_config_and_hasher(config, RandomState::new())
    }

    /// Creates a new, empty HashSet that can hold `cap` elements without growing.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        let mut set = HashSet::new();
        set.reserve(cap);
        set
    }

    /// Creates a HashSet with the provided `config`, containing `keys`. Keys are inserted in the
    /// order they are produced and duplicates are dropped.
    pub fn from_keys<I: IntoIterator<Item = T>>(config: SetConfig, keys: I) -> HashSet<T> {
        let mut set = HashSet::with_config(config);
        set.insert_all(keys);
        set
    }
}

impl<T, S> HashSet<T, S> {
    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the table.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    pub const fn config(&self) -> SetConfig {
        self.config
    }

    pub const fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor()
    }

    /// Returns the current ratio of elements to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Exchanges the contents, table and configuration of two sets, without touching any element.
    pub fn swap(&mut self, other: &mut HashSet<T, S>) {
        mem::swap(self, other);
    }

    /// Returns a cursor on the first element, or the end cursor if the set is empty. Iteration
    /// order is unspecified and changes whenever the table grows.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            &self.buckets,
            self.buckets.first().and_then(Chain::head),
            0,
            self.len,
            true,
        )
    }

    /// Equivalent to [`iter`](HashSet::iter).
    pub fn begin(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Returns the cursor one past the last element.
    pub fn end(&self) -> Iter<'_, T> {
        Iter::end(&self.buckets)
    }

    /// Writes the table to `sink`, one line per bucket, for debugging. Empty buckets are shown as
    /// `--FREE`, chains as `[a -> b]` in link order.
    pub fn dump<W: io::Write>(&self, sink: &mut W) -> io::Result<()>
    where
        T: Debug,
    {
        writeln!(sink, "table_size = {}, inserted_elements = {}", self.cap(), self.len)?;
        for (index, chain) in self.buckets.iter().enumerate() {
            match render_chain(chain) {
                Some(rendered) => writeln!(sink, "{index}: [{rendered}]")?,
                None => writeln!(sink, "{index}: --FREE")?,
            }
        }
        Ok(())
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    pub(crate) fn with_config_and_hasher(config: SetConfig, hasher: S) -> HashSet<T, S> {
        HashSet {
            buckets: alloc_table(config.min_cap()),
            len: 0,
            config,
            hasher,
        }
    }

    /// Inserts `item` if the set doesn't already contain an equal element, growing the table first
    /// if it would otherwise exceed the max load factor.
    ///
    /// Returns a cursor on the inserted element, or on the existing one (in which case `item` is
    /// dropped and the set is unchanged), along with whether an insertion took place.
    ///
    /// # Panics
    /// Panics if the table needs to grow and the new size overflows or can't be allocated.
    pub fn insert(&mut self, item: T) -> (Iter<'_, T>, bool) {
        if self.contains(&item) {
            return (self.find(&item), false);
        }

        self.reserve(self.len + 1);
        let index = self.add(item);

        (
            Iter::new(&self.buckets, self.buckets[index].head(), index, self.len, false),
            true,
        )
    }

    /// Inserts each of `items` in order, skipping any that are already present. Capacity is
    /// checked before every addition.
    ///
    /// # Panics
    /// Panics if the table needs to grow and the new size overflows or can't be allocated.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            if !self.contains(&item) {
                self.reserve(self.len + 1);
                self.add(item);
            }
        }
    }

    /// Returns true if the set contains an element equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        // Q is a borrowed form of T, which must hash and compare the same way T does.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).1.is_some()
    }

    /// Returns the number of elements equal to `key`, which is always 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        usize::from(self.contains(key))
    }

    /// Returns a reference to the element equal to `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).1.map(|node| &node.value)
    }

    /// Returns a cursor on the element equal to `key`, or the end cursor if there isn't one.
    pub fn find<Q>(&self, key: &Q) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key) {
            (index, Some(node)) => Iter::new(&self.buckets, Some(node), index, self.len, false),
            (_, None) => self.end(),
        }
    }

    /// Removes the element equal to `key`, returning the number of elements removed (0 or 1). The
    /// table is never shrunk.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        usize::from(self.take(key).is_some())
    }

    /// Removes the element equal to `key` and returns it, if there is one.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key);
        let removed = self.buckets[index].remove(key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Drops every element and resets the table to its minimum capacity.
    pub fn clear(&mut self) {
        trace!(cap = self.cap(), len = self.len, "clearing table");

        if self.cap() == self.config.min_cap() {
            self.buckets.iter_mut().for_each(Chain::clear);
        } else {
            self.buckets = alloc_table(self.config.min_cap());
        }
        self.len = 0;
    }

    /// Grows the table so that it can hold `n` elements in total without exceeding the max load
    /// factor. Does nothing if it already can.
    ///
    /// # Panics
    /// Panics if the new size overflows or can't be allocated. See
    /// [`try_reserve`](HashSet::try_reserve) for a non-panicking alternative.
    pub fn reserve(&mut self, n: usize) {
        self.try_reserve(n).throw()
    }

    /// Grows the table so that it can hold `n` elements in total without exceeding the max load
    /// factor. The bucket count is repeatedly doubled (plus one) until it is large enough.
    ///
    /// On failure, the set is left unchanged.
    pub fn try_reserve(&mut self, n: usize) -> Result<(), ReserveError> {
        if self.config.fits(self.cap(), n) {
            return Ok(());
        }

        let mut new_cap = self.cap();
        while !self.config.fits(new_cap, n) {
            // The +1 keeps the policy productive even if doubling starts from a tiny table.
            new_cap = new_cap
                .checked_mul(2)
                .and_then(|cap| cap.checked_add(1))
                .ok_or(CapacityOverflow)?;
        }

        self.try_rehash(new_cap)
    }

    /// Rebuilds the table with at least `n` buckets, moving every element into its new bucket.
    ///
    /// # Panics
    /// Panics if the new size overflows or can't be allocated. See
    /// [`try_rehash`](HashSet::try_rehash) for a non-panicking alternative.
    pub fn rehash(&mut self, n: usize) {
        self.try_rehash(n).throw()
    }

    /// Rebuilds the table with `max(min_cap, n, ceil(len / max_load_factor))` buckets, moving every
    /// element into its new bucket. The table never shrinks: if that count isn't larger than the
    /// current one, nothing happens.
    ///
    /// The new table is allocated before anything is moved and moving nodes doesn't allocate, so on
    /// failure the set is left unchanged.
    pub fn try_rehash(&mut self, n: usize) -> Result<(), ReserveError> {
        let new_cap = n
            .max(self.config.buckets_for(self.len)?)
            .max(self.config.min_cap());
        if new_cap <= self.cap() {
            return Ok(());
        }

        let new_buckets = try_alloc_table(new_cap).inspect_err(|error| {
            debug!(cap = self.cap(), new_cap, %error, "failed to grow table");
        })?;

        trace!(cap = self.cap(), new_cap, len = self.len, "rehashing table");

        let old_buckets = mem::replace(&mut self.buckets, new_buckets);
        self.len = 0;

        // Each old chain is emptied and released before moving on to the next one.
        for mut chain in old_buckets.into_vec() {
            while let Some(node) = chain.pop_node() {
                self.add_node(node);
            }
        }

        Ok(())
    }

    /// Replaces the contents of the set with `items`, keeping its configuration.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, items: I)
    where
        S: Clone,
    {
        let mut replacement = HashSet::with_config_and_hasher(self.config, self.hasher.clone());
        replacement.insert_all(items);
        self.swap(&mut replacement);
    }

    /// Calculates the bucket for the provided `key`. Only valid until the table is resized.
    fn index_of<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        // UNCHECKED: The table always has at least min_cap >= 1 buckets.
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Finds the bucket for `key` and the node holding an equal element, if there is one.
    fn locate<Q>(&self, key: &Q) -> (usize, Option<&Node<T>>)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key);
        (index, self.buckets[index].find(key))
    }

    /// Links `item` in at the head of its bucket, returning the bucket index. The caller must
    /// ensure that the set doesn't already contain `item` and that the table has room for it.
    fn add(&mut self, item: T) -> usize {
        let index = self.index_of(&item);
        self.buckets[index].push_front(item);
        self.len += 1;
        index
    }

    /// Relinks an existing `node` at the head of its bucket.
    fn add_node(&mut self, node: Box<Node<T>>) {
        let index = self.index_of(&node.value);
        self.buckets[index].push_node(node);
        self.len += 1;
    }
}

/// Exchanges the contents of two sets. See [`HashSet::swap`].
pub fn swap<T, S>(lhs: &mut HashSet<T, S>, rhs: &mut HashSet<T, S>) {
    lhs.swap(rhs);
}

fn try_alloc_table<T>(buckets: usize) -> Result<Box<[Chain<T>]>, AllocFailure> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(buckets)
        .map_err(|_| AllocFailure { buckets })?;
    table.extend(iter::repeat_with(Chain::new).take(buckets));
    Ok(table.into_boxed_slice())
}

fn alloc_table<T>(buckets: usize) -> Box<[Chain<T>]> {
    try_alloc_table(buckets).throw()
}

/// Renders the values in `chain` joined by arrows, or None if the chain is empty.
fn render_chain<T: Debug>(chain: &Chain<T>) -> Option<String> {
    if chain.is_empty() {
        return None;
    }

    Some(
        chain
            .values()
            .map(|value| format!("{value:?}"))
            .collect::<Vec<_>>()
            .join(" -> "),
    )
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        HashSet::new()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Clone> Clone for HashSet<T, S> {
    /// Creates an independent copy of the set: every element is cloned into a new node.
    fn clone(&self) -> Self {
        let mut copy = HashSet::with_config_and_hasher(self.config, self.hasher.clone());
        copy.reserve(self.len);
        for item in self {
            copy.add(item.clone());
        }
        copy
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for HashSet<T, S> {
    /// Two sets are equal if they have the same number of elements and every element of `self` is
    /// contained in `other`. Table sizes and layouts don't matter.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for HashSet<T, S> {}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.insert_all(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        HashSet::from_iter(value)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<T: Debug, S> Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field(
                "buckets",
                &self
                    .buckets
                    .iter()
                    .map(|chain| DebugRaw(render_chain(chain).unwrap_or_else(|| "-".into())))
                    .collect::<Vec<_>>(),
            )
            .field("len", &self.len)
            .field("cap", &self.buckets.len())
            .finish()
    }
}

impl<T: Display, S> Display for HashSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{{{}}}",
            self.iter()
                .map(|item| format!("{item}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
