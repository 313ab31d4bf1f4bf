//! Bulk loading of keys from line-oriented text.
//!
//! Each line of the source becomes one key. Case folding is a property of
//! the load, not of the tree, and is controlled by [`LoadOptions`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, KeyOrder};

/// How lines are turned into keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Lower-case every key before insertion.
    pub lowercase: bool,
    /// Skip lines that are empty once the line terminator is removed.
    pub skip_blank: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            skip_blank: false,
        }
    }
}

impl LoadOptions {
    /// Options that keep every line exactly as read.
    pub fn verbatim() -> Self {
        Self {
            lowercase: false,
            skip_blank: false,
        }
    }

    fn key_from_line(&self, line: String) -> Option<String> {
        if self.skip_blank && line.is_empty() {
            return None;
        }
        Some(if self.lowercase {
            line.to_lowercase()
        } else {
            line
        })
    }
}

/// Insert one key per line of `reader`, returning how many were inserted.
///
/// Loading stops at the first line that cannot be read (for example one
/// that is not valid UTF-8). Keys from earlier lines stay in the tree; the
/// error does not carry their count, so compare `tree.len()` before and
/// after if it matters.
pub fn load_from_reader<O, R>(
    tree: &mut BTree<O>,
    reader: R,
    options: &LoadOptions,
) -> io::Result<usize>
where
    O: KeyOrder,
    R: BufRead,
{
    let mut inserted = 0;
    for line in reader.lines() {
        if let Some(key) = options.key_from_line(line?) {
            tree.insert(key);
            inserted += 1;
        }
    }
    debug!(inserted, "loaded keys from reader");
    Ok(inserted)
}

/// Insert one key per line of the file at `path`.
///
/// A read failure partway through the file leaves the keys loaded so far in
/// the tree, as with [`load_from_reader`].
///
/// # Examples
///
/// ```no_run
/// use btree_index::{load_from_path, BTree, LoadOptions};
///
/// let mut tree = BTree::new(2).unwrap();
/// let count = load_from_path(&mut tree, "bad_passwords.txt", &LoadOptions::default()).unwrap();
/// assert_eq!(count, tree.len());
/// ```
pub fn load_from_path<O, P>(tree: &mut BTree<O>, path: P, options: &LoadOptions) -> BTreeResult<usize>
where
    O: KeyOrder,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(BTreeError::EmptySource);
    }

    let file = File::open(path).map_err(|e| BTreeError::io(path, e))?;
    let inserted = load_from_reader(tree, BufReader::new(file), options)
        .map_err(|e| BTreeError::io(path, e))?;

    info!(path = %path.display(), inserted, height = tree.height(), "loaded key file");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lowercases_by_default() {
        let mut tree = BTree::new(2).unwrap();
        let count = load_from_reader(&mut tree, Cursor::new("Hello\nWORLD\nabc\n"), &LoadOptions::default()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["abc", "hello", "world"]);
        assert!(!tree.contains("Hello"));
    }

    #[test]
    fn test_verbatim_keeps_case() {
        let mut tree = BTree::new(2).unwrap();
        load_from_reader(&mut tree, Cursor::new("Hello\nhello"), &LoadOptions::verbatim()).unwrap();
        assert!(tree.contains("Hello"));
        assert!(tree.contains("hello"));
    }

    #[test]
    fn test_blank_lines() {
        let source = "a\n\nb\r\n\n";
        let mut kept = BTree::new(2).unwrap();
        load_from_reader(&mut kept, Cursor::new(source), &LoadOptions::verbatim()).unwrap();
        assert_eq!(kept.len(), 4);
        assert!(kept.contains(""));
        assert!(kept.contains("b"));

        let mut skipped = BTree::new(2).unwrap();
        let options = LoadOptions {
            skip_blank: true,
            ..LoadOptions::verbatim()
        };
        load_from_reader(&mut skipped, Cursor::new(source), &options).unwrap();
        assert_eq!(skipped.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_invalid_line_keeps_earlier_keys() {
        let mut tree = BTree::new(2).unwrap();
        let source: &[u8] = b"alpha\nbeta\n\xff\xfe\ngamma\n";
        let err = load_from_reader(&mut tree, Cursor::new(source), &LoadOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["alpha", "beta"]);
        assert!(!tree.contains("gamma"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut tree = BTree::new(2).unwrap();
        let err = load_from_path(&mut tree, "", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, BTreeError::EmptySource));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let mut tree = BTree::new(2).unwrap();
        let err = load_from_path(&mut tree, "definitely/not/here.txt", &LoadOptions::default()).unwrap_err();
        match err {
            BTreeError::Io { path, .. } => assert_eq!(path, "definitely/not/here.txt"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
