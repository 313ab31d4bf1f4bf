//! Validation and debugging utilities for BTree.
//!
//! Structural auditing of the whole tree plus the validating `try_insert`
//! and `try_delete` wrappers.

use std::cmp::Ordering;

use tracing::warn;

use crate::error::{BTreeError, BTreeResult, BTreeResultExt, ModifyResult};
use crate::types::{BTree, KeyOrder, TreeNode};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<O: KeyOrder> BTree<O> {
    /// Check if the tree maintains the B-tree invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies key-count bounds, root flag placement, key order inside and
    /// across nodes, child counts, equal leaf depth and the tracked length.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        if !self.root.is_root() {
            return Err(BTreeError::data_integrity("root", "root flag not set"));
        }

        let mut audit = Audit {
            order: &self.order,
            degree: self.degree,
            leaf_depth: None,
            keys: 0,
        };
        audit.check_node(&self.root, None, None, 0, "root")?;

        if audit.keys != self.len {
            return Err(BTreeError::data_integrity(
                "length",
                &format!("tree records {} keys but holds {}", self.len, audit.keys),
            ));
        }
        Ok(())
    }

    /// Insert with invariant checks before and after.
    pub fn try_insert(&mut self, key: impl Into<String>) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;
        self.insert(key);
        self.validate_for_operation("insert")
    }

    /// Delete with invariant checks before and after.
    ///
    /// An absent key is reported as [`BTreeError::KeyNotFound`].
    pub fn try_delete(&mut self, key: &str) -> ModifyResult<()> {
        self.validate_for_operation("delete")?;
        if !self.delete(key) {
            return Err(BTreeError::KeyNotFound);
        }
        self.validate_for_operation("delete")
    }

    /// Check if tree is in a valid state for operations.
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed()
            .with_context(operation)
            .inspect_err(|e| warn!(operation, error = %e, "tree validation failed"))
    }

    // ============================================================================
    // DEBUGGING UTILITIES
    // ============================================================================

    /// Returns the key counts of all leaves, left to right.
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        collect_leaf_sizes(&self.root, &mut sizes);
        sizes
    }

    /// Prints the node structure for debugging.
    pub fn print_structure(&self) {
        println!("BTree structure (t = {}):", self.degree);
        print_node(&self.root, 0);
    }
}

struct Audit<'a, O> {
    order: &'a O,
    degree: usize,
    leaf_depth: Option<usize>,
    keys: usize,
}

impl<O: KeyOrder> Audit<'_, O> {
    /// Recursively check a node; `lower` / `upper` are the separators
    /// bracketing this subtree.
    fn check_node(
        &mut self,
        node: &TreeNode,
        lower: Option<&str>,
        upper: Option<&str>,
        depth: usize,
        path: &str,
    ) -> BTreeResult<()> {
        let is_root = depth == 0;
        if node.is_root() != is_root {
            return Err(BTreeError::data_integrity(path, "root flag on a non-root node"));
        }
        if node.t != self.degree {
            return Err(BTreeError::data_integrity(
                path,
                &format!("degree {} differs from tree degree {}", node.t, self.degree),
            ));
        }

        let len = node.len();
        if len > 2 * self.degree - 1 {
            return Err(BTreeError::data_integrity(path, &format!("{} keys exceeds maximum", len)));
        }
        let min = if is_root {
            usize::from(!node.is_leaf())
        } else {
            self.degree - 1
        };
        if len < min {
            return Err(BTreeError::data_integrity(path, &format!("{} keys below minimum {}", len, min)));
        }

        let keys: Vec<&str> = node.keys().collect();
        for pair in keys.windows(2) {
            if self.order.compare(pair[0], pair[1]) == Ordering::Greater {
                return Err(BTreeError::data_integrity(
                    path,
                    &format!("keys out of order: {:?} > {:?}", pair[0], pair[1]),
                ));
            }
        }
        if let (Some(lower), Some(first)) = (lower, keys.first()) {
            if self.order.compare(first, lower) == Ordering::Less {
                return Err(BTreeError::data_integrity(
                    path,
                    &format!("key {:?} below separator {:?}", first, lower),
                ));
            }
        }
        if let (Some(upper), Some(last)) = (upper, keys.last()) {
            if self.order.compare(last, upper) == Ordering::Greater {
                return Err(BTreeError::data_integrity(
                    path,
                    &format!("key {:?} above separator {:?}", last, upper),
                ));
            }
        }
        self.keys += len;

        if node.is_leaf() {
            if node.children().next().is_some() {
                return Err(BTreeError::data_integrity(path, "leaf has children"));
            }
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(BTreeError::data_integrity(
                    path,
                    &format!("leaf at depth {} but other leaves at {}", depth, expected),
                )),
            };
        }

        let children: Vec<&TreeNode> = node.children().collect();
        if children.len() != len + 1 {
            return Err(BTreeError::data_integrity(
                path,
                &format!("{} keys but {} children", len, children.len()),
            ));
        }
        for (i, child) in children.into_iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(keys[i - 1]) };
            let child_upper = if i == len { upper } else { Some(keys[i]) };
            let child_path = format!("{}/{}", path, i);
            self.check_node(child, child_lower, child_upper, depth + 1, &child_path)?;
        }
        Ok(())
    }
}

fn collect_leaf_sizes(node: &TreeNode, sizes: &mut Vec<usize>) {
    if node.is_leaf() {
        sizes.push(node.len());
    } else {
        for child in node.children() {
            collect_leaf_sizes(child, sizes);
        }
    }
}

fn print_node(node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let kind = if node.is_leaf() { "Leaf" } else { "Branch" };
    println!("{}{}: {:?}", indent, kind, node.keys().collect::<Vec<_>>());
    for child in node.children() {
        print_node(child, depth + 1);
    }
}
