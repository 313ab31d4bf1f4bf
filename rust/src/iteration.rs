//! Iterator implementations for BTree.
//!
//! In-order traversal keeps an explicit stack of `(node, next index)` frames
//! instead of recursing, so iteration is lazy and borrows the tree.

use std::iter::FusedIterator;

use crate::types::{BTree, KeyOrder, TreeNode};

/// In-order iterator over the keys of a [`BTree`].
pub struct KeyIterator<'a> {
    stack: Vec<(&'a TreeNode, usize)>,
    remaining: usize,
}

/// In-order iterator yielding each key with the depth of its node
/// (root depth 0).
pub struct DepthIterator<'a> {
    stack: Vec<(&'a TreeNode, usize, usize)>,
}

impl<O: KeyOrder> BTree<O> {
    /// Returns an iterator over all keys in order.
    pub fn keys(&self) -> KeyIterator<'_> {
        KeyIterator::new(&self.root, self.len)
    }

    /// Returns an iterator over `(key, depth)` in order.
    pub fn keys_with_depth(&self) -> DepthIterator<'_> {
        DepthIterator::new(&self.root)
    }
}

impl<'a> KeyIterator<'a> {
    fn new(root: &'a TreeNode, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    /// Pushes `node` and its leftmost path.
    fn descend_left(&mut self, mut node: &'a TreeNode) {
        loop {
            self.stack.push((node, 0));
            if node.is_leaf() {
                break;
            }
            node = node.child(0);
        }
    }
}

impl<'a> Iterator for KeyIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, index) = self.stack.last_mut()?;
            let node: &'a TreeNode = *node;
            if *index < node.len() {
                let key_index = *index;
                *index += 1;
                if !node.is_leaf() {
                    self.descend_left(node.child(key_index + 1));
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(node.key(key_index));
            }
            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for KeyIterator<'_> {}

impl FusedIterator for KeyIterator<'_> {}

impl<'a> DepthIterator<'a> {
    fn new(root: &'a TreeNode) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend_left(root, 0);
        iter
    }

    fn descend_left(&mut self, mut node: &'a TreeNode, mut depth: usize) {
        loop {
            self.stack.push((node, 0, depth));
            if node.is_leaf() {
                break;
            }
            node = node.child(0);
            depth += 1;
        }
    }
}

impl<'a> Iterator for DepthIterator<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, index, depth) = self.stack.last_mut()?;
            let (node, depth): (&'a TreeNode, usize) = (*node, *depth);
            if *index < node.len() {
                let key_index = *index;
                *index += 1;
                if !node.is_leaf() {
                    self.descend_left(node.child(key_index + 1), depth + 1);
                }
                return Some((node.key(key_index), depth));
            }
            self.stack.pop();
        }
    }
}

impl FusedIterator for DepthIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_yields_nothing() {
        let tree = BTree::new(2).unwrap();
        assert_eq!(tree.keys().next(), None);
        assert_eq!(tree.keys_with_depth().next(), None);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut tree = BTree::new(2).unwrap();
        let words = ["pear", "fig", "apple", "kiwi", "date", "lime", "plum", "nut", "yam", "bean"];
        tree.extend(words);

        let mut expected = words.to_vec();
        expected.sort();
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, expected);
        assert_eq!(tree.keys().len(), words.len());
    }

    #[test]
    fn test_depths_follow_structure() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(["b", "a", "c", "d"]);
        let pairs: Vec<(&str, usize)> = tree.keys_with_depth().collect();
        assert_eq!(pairs, [("a", 1), ("b", 0), ("c", 1), ("d", 1)]);
    }
}
