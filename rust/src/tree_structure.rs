//! Tree structure management operations for BTree.
//!
//! Size queries, clearing, node counting and the diagnostic dump.

use std::fmt;

use crate::types::{BTree, KeyOrder, TreeNode};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<O: KeyOrder> BTree<O> {
    /// Returns the number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Minimum degree the tree was built with.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The order used to compare keys.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of levels. The root always exists, so an empty tree has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node: &TreeNode = &self.root;
        while !node.is_leaf() {
            node = node.child(0);
            height += 1;
        }
        height
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root = Self::new_root_leaf(self.degree);
        self.len = 0;
    }
}

fn count_nodes(node: &TreeNode) -> usize {
    1 + node.children().map(count_nodes).sum::<usize>()
}

// ============================================================================
// DIAGNOSTIC DUMP
// ============================================================================

/// Comma-separated in-order listing of `key_depth` tokens, root depth 0.
///
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.extend(["b", "a", "c", "d"]);
/// assert_eq!(tree.to_string(), "a_1,b_0,c_1,d_1");
/// ```
impl<O: KeyOrder> fmt::Display for BTree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, depth)) in self.keys_with_depth().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}_{}", key, depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_clear() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(tree.len(), 6);
        assert!(tree.node_count() > 1);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.height(), 1);
        assert!(tree.root().is_root());
        tree.insert("x");
        assert!(tree.contains("x"));
    }

    #[test]
    fn test_empty_dump() {
        let tree = BTree::new(3).unwrap();
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn test_dump_of_three_levels() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert_eq!(tree.height(), 3);
        let dump = tree.to_string();
        let tokens: Vec<&str> = dump.split(',').collect();
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().any(|t| t.ends_with("_0")));
        assert!(tokens.iter().any(|t| t.ends_with("_2")));
        assert!(tokens.iter().all(|t| !t.ends_with("_3")));
    }
}
