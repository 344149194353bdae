//! Structural validation for the test harness.
//!
//! Checks the properties every public operation must preserve: balance,
//! key ordering, fill bounds, separator bounds, parallel vector lengths,
//! and entry-count consistency. Exposed so the integration tests can
//! assert them after each mutation; not part of the stable API.

use crate::node::Node;
use crate::tree::BpTree;
use arbor_common::key::BptKey;

/// Checks every structural invariant, returning the first violation found.
pub fn check_tree<K: BptKey, V>(tree: &BpTree<K, V>) -> Result<(), String> {
    let order = tree.order;

    // Root-specific fill bounds; descendants are checked on the walk.
    match &tree.root {
        Node::Leaf(leaf) => {
            if leaf.len() > order - 1 {
                return Err(format!(
                    "root leaf holds {} entries, max {}",
                    leaf.len(),
                    order - 1
                ));
            }
        }
        Node::Interior(root) => {
            if root.len() < 2 || root.len() > order {
                return Err(format!(
                    "interior root has {} children, expected 2..={}",
                    root.len(),
                    order
                ));
            }
        }
    }

    let mut leaf_depth = None;
    let mut entries = 0usize;
    check_node(
        &tree.root,
        true,
        0,
        None,
        None,
        order,
        &mut leaf_depth,
        &mut entries,
    )?;

    if entries != tree.num_entries {
        return Err(format!(
            "tree reports {} entries but traversal found {}",
            tree.num_entries, entries
        ));
    }
    Ok(())
}

/// Number of levels on the path from the root to a leaf, counting both.
pub fn depth<K: BptKey, V>(tree: &BpTree<K, V>) -> usize {
    let mut levels = 1;
    let mut node = &tree.root;
    while let Node::Interior(interior) = node {
        levels += 1;
        node = &interior.children[0];
    }
    levels
}

#[allow(clippy::too_many_arguments)]
fn check_node<K: BptKey, V>(
    node: &Node<K, V>,
    is_root: bool,
    level: usize,
    lower: Option<&K>,
    upper: Option<&K>,
    order: usize,
    leaf_depth: &mut Option<usize>,
    entries: &mut usize,
) -> Result<(), String> {
    match node {
        Node::Leaf(leaf) => {
            if leaf.keys.len() != leaf.vals.len() {
                return Err(format!(
                    "leaf key/value lengths diverge: {} vs {}",
                    leaf.keys.len(),
                    leaf.vals.len()
                ));
            }
            if !is_root {
                let min = order / 2;
                if leaf.len() < min || leaf.len() > order - 1 {
                    return Err(format!(
                        "leaf holds {} entries, expected {}..={}",
                        leaf.len(),
                        min,
                        order - 1
                    ));
                }
            }
            match leaf_depth {
                None => *leaf_depth = Some(level),
                Some(expected) if *expected != level => {
                    return Err(format!("leaf at depth {level}, expected {expected}"));
                }
                _ => {}
            }
            check_keys(&leaf.keys, lower, upper)?;
            *entries += leaf.len();
            Ok(())
        }
        Node::Interior(interior) => {
            if interior.keys.len() + 1 != interior.children.len() {
                return Err(format!(
                    "interior node has {} separators for {} children",
                    interior.keys.len(),
                    interior.children.len()
                ));
            }
            if !is_root {
                let min = (order + 1) / 2;
                if interior.len() < min || interior.len() > order {
                    return Err(format!(
                        "interior node has {} children, expected {}..={}",
                        interior.len(),
                        min,
                        order
                    ));
                }
            }
            check_keys(&interior.keys, lower, upper)?;
            for (i, child) in interior.children.iter().enumerate() {
                let child_lower = if i == 0 {
                    lower
                } else {
                    Some(&interior.keys[i - 1])
                };
                let child_upper = if i == interior.keys.len() {
                    upper
                } else {
                    Some(&interior.keys[i])
                };
                check_node(
                    child,
                    false,
                    level + 1,
                    child_lower,
                    child_upper,
                    order,
                    leaf_depth,
                    entries,
                )?;
            }
            Ok(())
        }
    }
}

/// Keys must be strictly increasing and lie inside `[lower, upper)`.
fn check_keys<K: BptKey>(keys: &[K], lower: Option<&K>, upper: Option<&K>) -> Result<(), String> {
    for pair in keys.windows(2) {
        if !pair[0].less_than(&pair[1]) {
            return Err(format!("keys out of order: {} then {}", pair[0], pair[1]));
        }
    }
    if let (Some(lo), Some(first)) = (lower, keys.first()) {
        if first.less_than(lo) {
            return Err(format!("key {first} below lower bound {lo}"));
        }
    }
    if let (Some(hi), Some(last)) = (upper, keys.last()) {
        if !last.less_than(hi) {
            return Err(format!("key {last} at or above upper bound {hi}"));
        }
    }
    Ok(())
}
