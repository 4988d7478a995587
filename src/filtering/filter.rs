//! Filtering trait.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait RowFilter<T> {
    fn accept(&self, item: T) -> bool;
}
