use crate::error::{Error, Result};
use crate::tree::{Insertion, Removal, TreeOps};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Unbalanced binary search tree whose nodes are owned by exactly one parent.
///
/// `insert` and `remove` walk a cursor down the child slots and replace the
/// slot they stop at with a moved-out subtree. No operation recurses per
/// level, so strictly ascending or descending input (where `height()` equals
/// `len()`) makes each call linear but never deepens the stack.
pub struct Tree<T: Ord> {
    root: Link<T>,
    len: usize,
}

pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// In-order iterator over the keys of a [`Tree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T: Ord + Clone + fmt::Debug> TreeOps<T> for Tree<T> {
    fn insert(&mut self, value: T) -> Insertion {
        let slot = Self::slot_for(&mut self.root, &value);
        if slot.is_some() {
            debug!(key = ?value, "already exists");
            return Insertion::Duplicate;
        }
        debug!(key = ?value, "inserted");
        *slot = Some(Node::boxed(value));
        self.len += 1;
        Insertion::Inserted
    }

    fn search(&self, value: &T) -> Option<usize> {
        let mut depth = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => {
                    trace!(key = ?value, depth, "found");
                    return Some(depth);
                }
            }
            depth += 1;
        }
        trace!(key = ?value, "not found");
        None
    }

    fn remove(&mut self, value: &T) -> Removal {
        let outcome = Self::unlink(Self::slot_for(&mut self.root, value));
        match outcome {
            Removal::Removed => {
                self.len -= 1;
                debug!(key = ?value, "removed");
            }
            Removal::NotFound => debug!(key = ?value, "not found"),
        }
        outcome
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(Node::children).collect();
        }
        height
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord + Clone + fmt::Debug> Tree<T> {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Root node for read-only walks; `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.leftmost().value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Checks the ordering invariant over the whole tree and that the node
    /// count agrees with `len()`.
    pub fn validate(&self) -> Result<()> {
        let mut counted = 0;
        let mut stack: Vec<(Option<&Node<T>>, Option<&T>, Option<&T>)> =
            vec![(self.root.as_deref(), None, None)];
        while let Some((link, lower, upper)) = stack.pop() {
            let Some(node) = link else {
                continue;
            };
            if let Some(lower) = lower {
                if node.value <= *lower {
                    return Err(Error::OrderViolation {
                        key: format!("{:?}", node.value),
                        bound: format!("> {lower:?}"),
                    });
                }
            }
            if let Some(upper) = upper {
                if node.value >= *upper {
                    return Err(Error::OrderViolation {
                        key: format!("{:?}", node.value),
                        bound: format!("< {upper:?}"),
                    });
                }
            }
            counted += 1;
            stack.push((node.left.as_deref(), lower, Some(&node.value)));
            stack.push((node.right.as_deref(), Some(&node.value), upper));
        }

        if counted != self.len {
            return Err(Error::LengthMismatch {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }

    /// Slot holding `value`, or the empty slot where it would be attached.
    fn slot_for<'a>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return slot,
            };
            slot = match (ordering, slot) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, slot) => return slot,
            };
        }
    }

    /// Replaces the node in `slot` by whatever subtree should take its place.
    fn unlink(slot: &mut Link<T>) -> Removal {
        let Some(mut node) = slot.take() else {
            return Removal::NotFound;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(right)) => Some(right),
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                node.value = right.leftmost().value.clone();
                node.left = Some(left);
                node.right = Some(right);
                // the successor has no left child, so this is a leaf or
                // right-only splice
                let successor = Self::slot_for(&mut node.right, &node.value);
                let outcome = Self::unlink(successor);
                debug_assert_eq!(outcome, Removal::Removed);
                Some(node)
            }
        };
        Removal::Removed
    }
}

impl<T: Ord + Clone + fmt::Debug> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    fn leftmost(&self) -> &Node<T> {
        let mut cur = self;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        cur
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T: Ord> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for Tree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
