//! INSERT operations for BTree.
//!
//! The root is split before descending whenever it is full, so every node
//! the recursive insert enters has room for one more key.

use std::mem;

use tracing::debug;

use crate::types::{BTree, KeyOrder, TreeNode};

impl<O: KeyOrder> BTree<O> {
    /// Insert a key.
    ///
    /// Duplicates are not rejected; an equal key is stored again.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert("apple");
    /// tree.insert("apple");
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>) {
        if self.root.is_full() {
            self.split_root();
        }
        self.root.insert_non_full(key.into(), &self.order);
        self.len += 1;
    }

    /// Grows the tree by one level: a new empty root adopts the full old
    /// root as its only child and splits it.
    fn split_root(&mut self) {
        let new_root = Box::new(TreeNode::new(self.degree, false, true));
        let mut old_root = mem::replace(&mut self.root, new_root);
        old_root.root = false;
        self.root.children.insert_first(old_root);
        self.root.split_child(0);

        debug!(degree = self.degree, len = self.len, "split root");
    }
}

impl<O: KeyOrder, S: Into<String>> Extend<S> for BTree<O> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_root_leaf() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert("b");
        tree.insert("a");
        tree.insert("c");
        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_full_root_splits_before_insert() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(["b", "a", "c", "d"]);

        assert!(!tree.root.is_leaf());
        assert!(tree.root.is_root());
        assert_eq!(tree.root.keys().collect::<Vec<_>>(), ["b"]);
        let children: Vec<Vec<&str>> = tree.root.children().map(|c| c.keys().collect()).collect();
        assert_eq!(children, vec![vec!["a"], vec!["c", "d"]]);
        assert!(tree.root.children().all(|c| !c.is_root()));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut tree = BTree::new(2).unwrap();
        for _ in 0..10 {
            tree.insert("same");
        }
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.keys().filter(|k| *k == "same").count(), 10);
        assert!(tree.check_invariants());
    }
}
