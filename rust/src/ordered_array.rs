//! Fixed-capacity, order-preserving array used for node keys and children.
//!
//! Only the live prefix `[0, len)` is observable. Every accessor is checked
//! against the active length, so there is no "empty slot" marker: elements
//! that are removed or transferred away simply stop existing here.
//!
//! The capacity is fixed at construction. Growing past it is a programming
//! error (a node must be split first) and panics.

use std::fmt;
use std::ops::Index;
use std::slice;

pub struct OrderedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> OrderedArray<T> {
    /// Creates an empty array able to hold `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of elements this array can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Index of the last live element. Panics when empty.
    #[inline]
    pub fn last_index(&self) -> usize {
        assert!(!self.is_empty(), "last_index on an empty OrderedArray");
        self.items.len() - 1
    }

    /// True if `i` has a live element to its right.
    #[inline]
    pub fn has_right(&self, i: usize) -> bool {
        i + 1 < self.items.len()
    }

    /// True if `i` has a live element to its left.
    #[inline]
    pub fn has_left(&self, i: usize) -> bool {
        i > 0
    }

    // ============================================================================
    // INDEXED ACCESS
    // ============================================================================

    #[inline]
    pub fn get(&self, i: usize) -> &T {
        self.check_index(i);
        &self.items[i]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        self.check_index(i);
        &mut self.items[i]
    }

    /// Replaces the element at `i`, returning the previous one.
    pub fn set(&mut self, i: usize, item: T) -> T {
        self.check_index(i);
        std::mem::replace(&mut self.items[i], item)
    }

    pub fn first(&self) -> &T {
        self.get(0)
    }

    pub fn last(&self) -> &T {
        self.get(self.last_index())
    }

    /// Mutable access to the neighbours `i` and `i + 1` at once.
    pub fn pair_mut(&mut self, i: usize) -> (&mut T, &mut T) {
        self.check_index(i + 1);
        let (left, right) = self.items.split_at_mut(i + 1);
        (&mut left[i], &mut right[0])
    }

    // ============================================================================
    // SHIFTING INSERT / REMOVE
    // ============================================================================

    /// Shifts `[i, len)` one slot right and stores `item` at `i`.
    pub fn insert_at(&mut self, i: usize, item: T) {
        assert!(
            !self.is_full(),
            "insert_at on a full OrderedArray (capacity {})",
            self.capacity
        );
        assert!(
            i <= self.items.len(),
            "insert_at index {} past active length {}",
            i,
            self.items.len()
        );
        self.items.insert(i, item);
    }

    /// Removes the element at `i`, shifting `[i + 1, len)` one slot left.
    pub fn remove_at(&mut self, i: usize) -> T {
        self.check_index(i);
        self.items.remove(i)
    }

    pub fn insert_first(&mut self, item: T) {
        self.insert_at(0, item);
    }

    pub fn insert_last(&mut self, item: T) {
        self.insert_at(self.items.len(), item);
    }

    pub fn remove_first(&mut self) -> T {
        self.remove_at(0)
    }

    pub fn remove_last(&mut self) -> T {
        self.remove_at(self.last_index())
    }

    // ============================================================================
    // BULK TRANSFER
    // ============================================================================

    /// Moves `count` elements starting at `source_start` in `source` into
    /// this array at `dest_start`, as a single bulk move.
    ///
    /// The source closes the gap left behind; both lengths are adjusted.
    pub fn take_range_from(
        &mut self,
        dest_start: usize,
        source: &mut OrderedArray<T>,
        source_start: usize,
        count: usize,
    ) {
        assert!(
            dest_start <= self.items.len(),
            "take_range_from destination {} past active length {}",
            dest_start,
            self.items.len()
        );
        assert!(
            source_start + count <= source.items.len(),
            "take_range_from source range {}..{} past active length {}",
            source_start,
            source_start + count,
            source.items.len()
        );
        assert!(
            self.items.len() + count <= self.capacity,
            "take_range_from would overflow capacity {} ({} + {})",
            self.capacity,
            self.items.len(),
            count
        );

        let moved = source.items.drain(source_start..source_start + count);
        if dest_start == self.items.len() {
            self.items.extend(moved);
        } else {
            let tail = self.items.split_off(dest_start);
            self.items.extend(moved);
            self.items.extend(tail);
        }
    }

    /// Moves everything from `start` to the end of `source` onto the end of
    /// this array.
    pub fn take_tail_from(&mut self, source: &mut OrderedArray<T>, start: usize) {
        let count = source.len() - start;
        self.take_range_from(self.len(), source, start, count);
    }

    // ============================================================================
    // VIEWS
    // ============================================================================

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    fn check_index(&self, i: usize) {
        assert!(
            i < self.items.len(),
            "index {} out of active range (len {})",
            i,
            self.items.len()
        );
    }
}

impl<T> Index<usize> for OrderedArray<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

impl<'a, T> IntoIterator for &'a OrderedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedArray")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
