//! In-memory B-tree index over string keys.
//!
//! This crate provides a classical B-tree of configurable minimum degree `t`:
//! every node holds between `t-1` and `2t-1` keys, full nodes are split on
//! the way down during insertion and minimal nodes are topped up (by
//! borrowing from a sibling or merging with it) on the way down during
//! deletion, so no operation ever needs to walk back up the tree.
//!
//! Keys are compared through a [`KeyOrder`]; the default is plain
//! lexicographic order. Bulk loading from text lives in [`loader`].

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
pub mod loader;
mod node;
mod ordered_array;
mod tree_structure;
mod types;
mod validation;

pub use construction::validate_degree;
pub use error::{BTreeError, BTreeResult, BTreeResultExt, InitResult, ModifyResult};
pub use iteration::{DepthIterator, KeyIterator};
pub use loader::{load_from_path, load_from_reader, LoadOptions};
pub use ordered_array::OrderedArray;
pub use types::{
    BTree, FoundIndexPair, KeyOrder, Lexicographic, NodeIndexPair, TreeNode, DEFAULT_DEGREE,
    MIN_DEGREE,
};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_root_split_then_delete() {
        let mut tree = BTree::new(2).unwrap();
        for key in ["b", "a", "c", "d"] {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 2);
        assert!(tree.contains("a"));
        assert!(tree.contains("d"));
        assert!(!tree.contains("z"));

        assert!(tree.delete("b"));
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["a", "c", "d"]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_increasing_run_keeps_height_logarithmic() {
        let mut tree = BTree::new(2).unwrap();
        let tokens: Vec<String> = (0..20).map(|i| format!("token{:02}", i)).collect();

        let mut last_height = tree.height();
        for token in &tokens {
            tree.insert(token.as_str());
            let height = tree.height();
            assert!(height >= last_height);
            last_height = height;
        }

        // a node of degree 2 has at least 2 children, so height <= log2(n + 1)
        let bound = (((tokens.len() + 1) as f64).log2()).ceil() as usize;
        assert!(tree.height() <= bound, "height {} exceeds {}", tree.height(), bound);
        assert!(tokens.iter().all(|t| tree.contains(t)));
    }
}
