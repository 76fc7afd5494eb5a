use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};

/// Turns a bit iterator into the sorted iterator of the indices it yields `true` at.
pub fn support_iterator(iter: impl Iterator<Item = bool>) -> impl SortedIterator<Item = usize> {
    iter.enumerate()
        .filter(|pair| pair.1)
        .map(|pair| pair.0)
        .assume_sorted_by_item()
}
