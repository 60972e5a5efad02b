use core::cmp::Ordering;

/// The index reported for an item which is not present.
pub const NOT_FOUND: i64 = -1;

/// Finds `item` in `data`, which must already be sorted ascending.
///
/// An unsorted `data` gives an unspecified answer; it is never an error.
pub fn binary_search<T: Ord>(data: &[T], item: &T) -> Option<usize> {
    search_range(data, item, 0, data.len())
}

// Searches the half-open range `start..end`, probing the same midpoint as an
// inclusive `[start, end - 1]` search would.
fn search_range<T: Ord>(data: &[T], item: &T, start: usize, end: usize) -> Option<usize> {
    if start >= end {
        return None;
    }

    let mid = start + (end - 1 - start) / 2;
    match data[mid].cmp(item) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => search_range(data, item, start, mid),
        Ordering::Less => search_range(data, item, mid + 1, end),
    }
}
