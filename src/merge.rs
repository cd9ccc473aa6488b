//! Top-down merge sort with two scoped auxiliary buffers per merge.
//!
//! Stable: on ties the merge takes from the left half, so equal elements keep their relative
//! order across every split.

use std::cmp::Ordering;

use crate::errors::SortError;

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord + Clone,
{
    merge_sort(v, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    // The left half takes the middle element, `[0..=(len - 1) / 2]`.
    let mid = len - len / 2;

    merge_sort(&mut v[..mid], is_less)?;
    merge_sort(&mut v[mid..], is_less)?;
    merge(v, mid, is_less)
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
///
/// Both runs are copied into freshly reserved buffers first. If the reservation fails `v` is
/// left untouched.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let left = copy_to_buffer(&v[..mid])?;
    let right = copy_to_buffer(&v[mid..])?;

    let mut state = MergeState {
        dest: v,
        left,
        right,
        left_pos: 0,
        right_pos: 0,
    };

    while state.left_pos < state.left.len() && state.right_pos < state.right.len() {
        let out = state.left_pos + state.right_pos;

        // Ties take from the left buffer.
        if is_less(&state.right[state.right_pos], &state.left[state.left_pos]) {
            state.dest[out].clone_from(&state.right[state.right_pos]);
            state.right_pos += 1;
        } else {
            state.dest[out].clone_from(&state.left[state.left_pos]);
            state.left_pos += 1;
        }
    }

    // Dropping `state` writes back whichever buffer still holds elements.
    Ok(())
}

/// When dropped, copies the not yet consumed parts of `left` and then `right` into the remaining
/// slots of `dest`.
///
/// This completes a finished interleave, and if `is_less` panics it leaves `dest` holding a
/// permutation of its original elements.
struct MergeState<'a, T: Clone> {
    dest: &'a mut [T],
    left: Vec<T>,
    right: Vec<T>,
    left_pos: usize,
    right_pos: usize,
}

impl<T: Clone> Drop for MergeState<'_, T> {
    fn drop(&mut self) {
        let written = self.left_pos + self.right_pos;
        let remaining = self.left[self.left_pos..]
            .iter()
            .chain(self.right[self.right_pos..].iter());

        for (slot, val) in self.dest[written..].iter_mut().zip(remaining) {
            slot.clone_from(val);
        }
    }
}

fn copy_to_buffer<T: Clone>(src: &[T]) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| SortError::AllocationFailed {
            requested: src.len(),
        })?;
    buf.extend_from_slice(src);

    Ok(buf)
}
