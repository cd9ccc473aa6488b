//! Randomized quicksort with a Lomuto partition.
//!
//! The pivot is drawn uniformly from the current sub-slice and moved to its last slot before
//! partitioning. After each partition the smaller side is sorted recursively and the loop
//! continues on the larger side, which bounds the recursion depth to *O*(log(*n*)) even in the
//! quadratic worst case.

use std::cmp::Ordering;

use rand::Rng;

/// Sorts `v` drawing pivots from the calling thread's generator.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b), &mut rand::thread_rng());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(
        v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        &mut rand::thread_rng(),
    );
}

/// Sorts `v` drawing pivots from `rng`. A seeded generator makes the sequence of comparisons
/// reproducible.
#[inline]
pub fn sort_with_rng<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    quicksort(v, &mut |a, b| a.lt(b), rng);
}

#[inline]
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less, rng);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn quicksort<T, F, R>(mut v: &mut [T], is_less: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = partition(v, is_less, rng);

        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort(left, is_less, rng);
            v = right;
        } else {
            quicksort(right, is_less, rng);
            v = left;
        }
    }
}

/// Partitions `v` around a randomly chosen pivot and returns the pivot's final position.
///
/// Every element `e` with `!is_less(pivot, e)` ends up left of the pivot, every other element
/// right of it.
fn partition<T, F, R>(v: &mut [T], is_less: &mut F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    // The caller ensures `v` holds at least two elements.
    let last = v.len() - 1;

    let pivot_pos = rng.gen_range(0..=last);
    v.swap(pivot_pos, last);

    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let mut boundary = 0;
    for j in 0..rest.len() {
        if !is_less(pivot, &rest[j]) {
            rest.swap(boundary, j);
            boundary += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(boundary, last);

    boundary
}
