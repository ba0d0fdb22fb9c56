//! OrderedIndex implementation
//!
//! Binary search tree keyed by product code. Every node exclusively owns
//! its children; mutations rebind the affected subtree slot in place, so
//! no parent pointers are needed.

use super::Record;

/// Internal tree node
struct Node {
    record: Record,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: Record) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// Ordered key → record store backed by a binary search tree
///
/// Invariant: for every node, all codes in its left subtree are strictly
/// less than the node's code and all codes in its right subtree are
/// strictly greater. Duplicate inserts are rejected, so an in-order
/// traversal yields strictly ascending codes.
#[derive(Default)]
pub struct OrderedIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl OrderedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; returns false (tree unchanged) if the code exists
    pub fn insert(&mut self, code: i64, name: impl Into<String>, price: f64) -> bool {
        let inserted = insert_node(&mut self.root, Record::new(code, name, price));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Look up a record by code
    pub fn search(&self, code: i64) -> Option<&Record> {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if code == current.record.code {
                return Some(&current.record);
            }
            node = if code < current.record.code {
                current.left.as_deref()
            } else {
                current.right.as_deref()
            };
        }
        None
    }

    /// Remove a record by code; returns false if the code is absent
    pub fn remove(&mut self, code: i64) -> bool {
        let removed = remove_node(&mut self.root, code);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Materialize all records in ascending code order
    pub fn inorder(&self) -> Vec<Record> {
        let mut out = Vec::with_capacity(self.len);
        collect_inorder(self.root.as_deref(), &mut out);
        out
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Recursive insert; attaches a new node at the first absent slot
fn insert_node(slot: &mut Option<Box<Node>>, record: Record) -> bool {
    match slot {
        None => {
            *slot = Some(Node::new(record));
            true
        }
        Some(node) if record.code < node.record.code => insert_node(&mut node.left, record),
        Some(node) if record.code > node.record.code => insert_node(&mut node.right, record),
        // Exact match: duplicate codes are rejected
        Some(_) => false,
    }
}

/// Recursive remove; rebinds `slot` to the updated subtree root
fn remove_node(slot: &mut Option<Box<Node>>, code: i64) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };
    if code < node.record.code {
        remove_node(&mut node.left, code)
    } else if code > node.record.code {
        remove_node(&mut node.right, code)
    } else {
        match (node.left.take(), node.right.take()) {
            // At most one child: the child (possibly absent) takes this slot
            (None, right) => *slot = right,
            (left, None) => *slot = left,
            // Two children: absorb the in-order successor (leftmost of the
            // right subtree), then remove the successor's original node.
            // That removal always hits a simpler case: a subtree minimum
            // has no left child.
            (left, Some(right)) => {
                let successor = {
                    let mut current: &Node = &right;
                    while let Some(next) = current.left.as_deref() {
                        current = next;
                    }
                    current.record.clone()
                };
                let successor_code = successor.code;
                node.record = successor;
                node.left = left;
                let mut right = Some(right);
                remove_node(&mut right, successor_code);
                node.right = right;
            }
        }
        true
    }
}

fn collect_inorder(node: Option<&Node>, out: &mut Vec<Record>) {
    if let Some(node) = node {
        collect_inorder(node.left.as_deref(), out);
        out.push(node.record.clone());
        collect_inorder(node.right.as_deref(), out);
    }
}
