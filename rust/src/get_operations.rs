//! GET operations for BTree.
//!
//! Read-only lookups: exact search, membership and the tree-wide minimum
//! and maximum.

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, KeyOrder, NodeIndexPair};

impl<O: KeyOrder> BTree<O> {
    /// Locate `key` in the tree.
    ///
    /// Search stops at the first node holding an equal key, so with
    /// duplicates the reported location is the highest one in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend(["b", "a", "c", "d"]);
    ///
    /// let found = tree.search("d").unwrap();
    /// assert_eq!(found.key(), "d");
    /// assert!(tree.search("z").is_none());
    /// ```
    pub fn search(&self, key: &str) -> Option<NodeIndexPair<'_>> {
        self.root.search(key, &self.order)
    }

    /// Check if `key` is stored in the tree.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Like [`search`](Self::search), but reports an absent key as
    /// [`BTreeError::KeyNotFound`].
    pub fn try_search(&self, key: &str) -> BTreeResult<NodeIndexPair<'_>> {
        self.search(key).ok_or(BTreeError::KeyNotFound)
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&str> {
        self.root.find_minimum().map(|pair| pair.key())
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&str> {
        self.root.find_maximum().map(|pair| pair.key())
    }

    /// Check every key in `keys`, returning how many are present.
    pub fn count_present<'k, I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'k str>,
    {
        keys.into_iter().filter(|key| self.contains(key)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTree {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(["m", "f", "t", "b", "h", "p", "w", "a", "c"]);
        tree
    }

    #[test]
    fn test_search_finds_every_key() {
        let tree = sample();
        for key in ["m", "f", "t", "b", "h", "p", "w", "a", "c"] {
            let pair = tree.search(key).unwrap();
            assert_eq!(pair.key(), key);
            assert_eq!(pair.node().key(pair.index()), key);
        }
        assert!(tree.search("z").is_none());
        assert!(tree.search("").is_none());
        assert!(matches!(tree.try_search("q"), Err(BTreeError::KeyNotFound)));
    }

    #[test]
    fn test_first_and_last() {
        let tree = sample();
        assert_eq!(tree.first(), Some("a"));
        assert_eq!(tree.last(), Some("w"));

        let empty = BTree::new(2).unwrap();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_neighbours_of_internal_key() {
        let tree = sample();
        let root_key = tree.root.key(0);
        let pair = tree.search(root_key).unwrap();
        assert!(!pair.node().is_leaf());

        let all: Vec<&str> = tree.keys().collect();
        let pos = all.iter().position(|k| *k == root_key).unwrap();
        assert_eq!(pair.predecessor().map(|p| p.key()), Some(all[pos - 1]));
        assert_eq!(pair.successor().map(|p| p.key()), Some(all[pos + 1]));
    }

    #[test]
    fn test_count_present() {
        let tree = sample();
        assert_eq!(tree.count_present(["a", "b", "zz", "w", "q"]), 3);
    }
}
