//! Coordinate range validation.
//!
//! Out-of-range points are never an error: they are removed and counted so
//! the caller can report how many were dropped.

use crate::record::Located;

/// Output of [`validate_coordinates`]: surviving items in input order plus the
/// number removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T> {
    pub kept:    Vec<T>,
    pub dropped: usize,
}

impl<T> Validated<T> {
    /// Total number of items that were offered to the validator.
    pub fn total(&self) -> usize {
        self.kept.len() + self.dropped
    }
}

/// Keep the items whose coordinate satisfies [`GeoPoint::is_valid`], in input
/// order.
///
/// [`GeoPoint::is_valid`]: crate::GeoPoint::is_valid
pub fn validate_coordinates<T, I>(items: I) -> Validated<T>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let iter = items.into_iter();
    let mut kept = Vec::with_capacity(iter.size_hint().0);
    let mut dropped = 0usize;

    for item in iter {
        if item.location().is_valid() {
            kept.push(item);
        } else {
            dropped += 1;
        }
    }

    Validated { kept, dropped }
}
