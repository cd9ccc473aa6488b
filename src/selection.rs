//! Selection sort. Performs exactly `len - 1` swaps whatever the input order.

use std::cmp::Ordering;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..(len - 1) {
        let mut extreme = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[extreme]) {
                extreme = j;
            }
        }

        // Unconditional, a self-swap when `v[i]` is already in place.
        v.swap(i, extreme);
    }
}
