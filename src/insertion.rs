//! Insertion sort, shifting each element backward past strictly greater predecessors.
//!
//! The element travels by adjacent swaps rather than through a held temporary, so `T` needs
//! neither `Copy` nor `Clone`. Each displaced predecessor still ends up one slot to the right and
//! the comparisons are the same.

use std::cmp::Ordering;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` backward into the sorted prefix `v[..v.len() - 1]`.
///
/// The displaced predecessors move right one slot each, one swap per step. The scan stops at the first predecessor
/// that is not strictly greater, so equal elements keep their relative order.
#[inline]
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut hole = v.len() - 1;

    while hole > 0 && is_less(&v[hole], &v[hole - 1]) {
        v.swap(hole - 1, hole);
        hole -= 1;
    }
}
