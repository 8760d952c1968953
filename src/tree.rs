/// Result of inserting a key.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// The key was already present; the tree is unchanged.
    Duplicate,
}

/// Result of removing a key.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// The key was not present; the tree is unchanged.
    NotFound,
}

pub trait TreeOps<T> {
    fn insert(&mut self, value: T) -> Insertion;
    /// Number of comparisons needed to reach `value`, the root being depth 0.
    fn search(&self, value: &T) -> Option<usize>;
    fn remove(&mut self, value: &T) -> Removal;
    /// Number of levels; 0 for an empty tree.
    fn height(&self) -> usize;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}
