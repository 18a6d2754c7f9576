//! Insertion-ordered group-by with a stable descending sort.
//!
//! Groups are emitted in the order their key first appears in the input, and
//! [`sort_desc_stable`] keeps that order among equal values.  Together these
//! define every tie-break in the crate.

use rustc_hash::FxHashMap;

/// Fold `value(r)` into a per-key `u64` total, keyed by `key(r)`.
///
/// The returned groups are in first-appearance order of their key.  A group
/// whose values are all 0 is still returned.
pub fn group_sum<'a, T, K, V>(records: &'a [T], key: K, value: V) -> Vec<(&'a str, u64)>
where
    K: Fn(&'a T) -> &'a str,
    V: Fn(&T) -> u64,
{
    let mut slot: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut groups: Vec<(&'a str, u64)> = Vec::new();

    for r in records {
        let k = key(r);
        let i = *slot.entry(k).or_insert_with(|| {
            groups.push((k, 0));
            groups.len() - 1
        });
        groups[i].1 += value(r);
    }

    groups
}

/// Sort by descending value, keeping the existing order among equal values.
///
/// `slice::sort_by` is guaranteed stable.
pub fn sort_desc_stable<T>(items: &mut [T], value: impl Fn(&T) -> u64) {
    items.sort_by(|a, b| value(b).cmp(&value(a)));
}
