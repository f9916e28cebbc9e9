use indexmap::IndexSet;
use indexmap::set::{IntoIter, Iter};
use serde::Serialize;

/// Insertion-ordered set of path strings
///
/// Duplicates collapse onto their first occurrence, so iteration order is the
/// order in which each path was first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathSet {
    paths: IndexSet<String>,
}

impl PathSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Add a path, returning `false` if it was already present
    pub fn insert(&mut self, path: impl Into<String>) -> bool { self.paths.insert(path.into()) }

    /// Check membership
    #[must_use]
    pub fn contains(&self, path: &str) -> bool { self.paths.contains(path) }

    /// Number of distinct paths
    #[must_use]
    pub fn len(&self) -> usize { self.paths.len() }

    /// Whether no path was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool { self.paths.is_empty() }

    /// Iterate in first-encountered order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, String> { self.paths.iter() }

    /// Collect into a `Vec` preserving order
    #[must_use]
    pub fn into_vec(self) -> Vec<String> { self.paths.into_iter().collect() }
}

impl<S: Into<String>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for PathSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for PathSet {
    type IntoIter = IntoIter<String>;
    type Item = String;

    fn into_iter(self) -> Self::IntoIter { self.paths.into_iter() }
}

impl<'a> IntoIterator for &'a PathSet {
    type IntoIter = Iter<'a, String>;
    type Item = &'a String;

    fn into_iter(self) -> Self::IntoIter { self.paths.iter() }
}
