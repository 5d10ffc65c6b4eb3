use std::{fmt, ops::Deref, sync::Arc};

/// An ordered, immutable sequence of elements.
///
/// `Sequence` is a cheap-to-clone handle over shared storage: every clone refers to
/// the same elements, and there is no way to mutate them once constructed. This is
/// what lets one sequence be handed to many concurrent lookups at once.
pub struct Sequence<T>(Arc<[T]>);

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn empty() -> Self {
        Sequence(Arc::from(Vec::new()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl Sequence<i64> {
    /// Builds the sequence `1, 2, ..., len`.
    pub fn one_based(len: usize) -> Self {
        (1..=len as i64).collect()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence(Arc::clone(&self.0))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Sequence(values.into())
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Sequence(values.into())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let seq = Sequence::from(vec![1, 2, 3]);
        let other = seq.clone();
        assert!(std::ptr::eq(seq.as_slice(), other.as_slice()));
        assert_eq!(other.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_one_based() {
        assert_eq!(Sequence::one_based(4).as_slice(), &[1, 2, 3, 4]);
        assert!(Sequence::one_based(0).is_empty());
    }

    #[test]
    fn test_empty_and_debug() {
        let seq = Sequence::<String>::empty();
        assert_eq!(seq.len(), 0);
        assert_eq!(format!("{:?}", Sequence::from(vec!["a", "b"])), r#"["a", "b"]"#);
    }
}
