//! Shell sort over the Knuth gap sequence 1, 4, 13, 40, ...
//!
//! Like [`crate::insertion`], elements move by swaps `gap` slots apart.

use std::cmp::Ordering;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Returns the first gap of the sequence `gap = gap * 3 + 1` that is not below `len / 3`.
#[inline]
pub fn initial_gap(len: usize) -> usize {
    let mut gap = 1;
    while gap < len / 3 {
        gap = gap * 3 + 1;
    }

    gap
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = initial_gap(len);

    while gap > 0 {
        for i in gap..len {
            let mut j = i;

            // Non-strict: the element keeps moving past predecessors that compare equal.
            while j >= gap && !is_less(&v[j - gap], &v[j]) {
                v.swap(j - gap, j);
                j -= gap;
            }
        }

        gap = (gap - 1) / 3;
    }
}
