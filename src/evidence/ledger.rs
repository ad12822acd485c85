//! Ordered set of discovered clues
//!
//! The ledger is an unbalanced binary search tree keyed by clue text. Its shape
//! only reflects insertion order; nothing is ever rebalanced or removed.
//! Comparison is plain byte-wise string ordering, so `"Zebra" < "apple"`.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Self {
        ClueNode {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Deduplicating, alphabetically ordered collection of clue texts
#[derive(Debug, Default)]
pub struct ClueLedger {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `clue` unless it is already present.
    ///
    /// Returns `true` when the clue is new. A duplicate is a no-op, not an error.
    pub fn try_insert(&mut self, clue: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(ClueNode::new(clue)));
        self.len += 1;
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending order. Can be called any number of times.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Number of distinct clues collected
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&ClueNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

impl Drop for ClueLedger {
    // Iterative teardown: recursive Box drops overflow the stack on list-shaped trees
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order traversal over a [`ClueLedger`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}
