//! Construction and initialization logic for BTree.
//!
//! Degree validation and the default instances live here.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, KeyOrder, Lexicographic, TreeNode, DEFAULT_DEGREE, MIN_DEGREE};

impl BTree {
    /// Create an empty B-tree of minimum degree `degree` using byte-wise
    /// lexicographic key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let tree = BTree::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> InitResult<Self> {
        Self::with_order(degree, Lexicographic)
    }
}

impl<O: KeyOrder> BTree<O> {
    /// Create an empty B-tree of minimum degree `degree` that compares keys
    /// with `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::with_order(2, |a: &str, b: &str| b.cmp(a)).unwrap();
    /// tree.extend(["a", "b", "c"].map(String::from));
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), ["c", "b", "a"]);
    /// ```
    pub fn with_order(degree: usize, order: O) -> InitResult<Self> {
        validate_degree(degree)?;
        Ok(Self::empty(degree, order))
    }

    /// Builds the empty tree without validating `degree`.
    pub(crate) fn empty(degree: usize, order: O) -> Self {
        Self {
            degree,
            root: Self::new_root_leaf(degree),
            len: 0,
            order,
        }
    }

    pub(crate) fn new_root_leaf(degree: usize) -> Box<TreeNode> {
        Box::new(TreeNode::new(degree, true, true))
    }
}

impl Default for BTree {
    /// Create a B-tree with [`DEFAULT_DEGREE`].
    fn default() -> Self {
        Self::empty(DEFAULT_DEGREE, Lexicographic)
    }
}

/// Validate that `degree` is usable as a minimum degree.
pub fn validate_degree(degree: usize) -> InitResult<()> {
    if degree < MIN_DEGREE {
        Err(BTreeError::invalid_degree(degree, MIN_DEGREE))
    } else {
        Ok(())
    }
}
