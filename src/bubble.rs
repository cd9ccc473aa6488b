//! Bubble sort with early exit once a full pass performs no swap.

use std::cmp::Ordering;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut len = v.len();
    if len < 2 {
        return;
    }

    loop {
        let mut swapped = false;

        for i in 1..len {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        // The largest remaining element has settled at the end of the unsorted suffix.
        len -= 1;

        if !swapped {
            break;
        }
    }
}
