//! Six classical comparison sorts behind one configurable [`Sorter`].
//!
//! Each algorithm also lives in its own module exposing `sort` and `sort_by` over a whole slice.
//! [`Sorter`] adds the direction flag and the two caller contracts: a length for the simple
//! quadratic sorts, a half-open range for merge and quick sort.

use std::cmp::Ordering;

use rand::Rng;

pub mod bubble;
pub mod config;
pub mod errors;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

use config::{Family, LengthSort, RangeSort};

pub use config::{Algorithm, Direction, EntryPoint};
pub use errors::SortError;

/// Sorting configuration: which algorithm, in which direction.
///
/// A `Sorter` holds no generator state. Quick sort draws its pivots from the calling thread's
/// generator, or from a caller-supplied one via [`Sorter::sort_range_with_rng`], so a single
/// `Sorter` can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sorter {
    algorithm: Algorithm,
    direction: Direction,
}

impl Sorter {
    pub const fn new(algorithm: Algorithm, direction: Direction) -> Self {
        Self {
            algorithm,
            direction,
        }
    }

    pub const fn ascending(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Direction::Ascending)
    }

    pub const fn descending(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Direction::Descending)
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sorts `v[..len]` with bubble, insertion, selection or shell sort.
    ///
    /// # Errors
    ///
    /// - [`SortError::WrongEntryPoint`] if the algorithm is merge or quick sort, those take a
    ///   range, see [`Sorter::sort_range`].
    /// - [`SortError::LengthOutOfBounds`] if `len > v.len()`.
    ///
    /// `v` is untouched on error.
    pub fn sort<T>(&self, v: &mut [T], len: usize) -> Result<(), SortError>
    where
        T: Ord,
    {
        self.sort_by(v, len, T::cmp)
    }

    /// Like [`Sorter::sort`], with `compare` as the ordering the direction is applied to.
    pub fn sort_by<T, F>(&self, v: &mut [T], len: usize, compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let algorithm = match self.algorithm.family() {
            Family::Length(algorithm) => algorithm,
            Family::Range(_) => return Err(self.wrong_entry_point(EntryPoint::Length)),
        };

        if len > v.len() {
            log::debug!(
                "rejecting {} sort of {len} elements, buffer holds {}",
                self.algorithm,
                v.len()
            );
            return Err(SortError::LengthOutOfBounds {
                len,
                buffer_len: v.len(),
            });
        }

        log::trace!(
            "{} sort, {}, {len} elements",
            self.algorithm,
            self.direction
        );

        let v = &mut v[..len];
        let mut is_less = self.direction.is_less_by(compare);

        match algorithm {
            LengthSort::Bubble => bubble::bubble_sort(v, &mut is_less),
            LengthSort::Insertion => insertion::insertion_sort(v, &mut is_less),
            LengthSort::Selection => selection::selection_sort(v, &mut is_less),
            LengthSort::Shell => shell::shell_sort(v, &mut is_less),
        }

        Ok(())
    }

    /// Sorts the half-open range `v[left..right]` with merge or quick sort.
    ///
    /// Quick sort draws its pivots from [`rand::thread_rng`].
    ///
    /// # Errors
    ///
    /// - [`SortError::WrongEntryPoint`] if the algorithm is one of the simple sorts, those take
    ///   a length, see [`Sorter::sort`].
    /// - [`SortError::InvalidRange`] if `left > right` or `right > v.len()`.
    /// - [`SortError::AllocationFailed`] if merge sort cannot reserve its buffers. The range then
    ///   holds a permutation of its original elements that is not necessarily sorted.
    pub fn sort_range<T>(&self, v: &mut [T], left: usize, right: usize) -> Result<(), SortError>
    where
        T: Ord + Clone,
    {
        self.sort_range_with_rng(v, left, right, &mut rand::thread_rng())
    }

    /// Like [`Sorter::sort_range`], drawing quick sort pivots from `rng`.
    pub fn sort_range_with_rng<T, R>(
        &self,
        v: &mut [T],
        left: usize,
        right: usize,
        rng: &mut R,
    ) -> Result<(), SortError>
    where
        T: Ord + Clone,
        R: Rng + ?Sized,
    {
        self.sort_range_by_with_rng(v, left, right, T::cmp, rng)
    }

    /// Like [`Sorter::sort_range_with_rng`], with `compare` as the ordering the direction is
    /// applied to.
    pub fn sort_range_by_with_rng<T, F, R>(
        &self,
        v: &mut [T],
        left: usize,
        right: usize,
        compare: F,
        rng: &mut R,
    ) -> Result<(), SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
        R: Rng + ?Sized,
    {
        let algorithm = match self.algorithm.family() {
            Family::Range(algorithm) => algorithm,
            Family::Length(_) => return Err(self.wrong_entry_point(EntryPoint::Range)),
        };

        if left > right || right > v.len() {
            log::debug!(
                "rejecting {} sort of range {left}..{right}, buffer holds {}",
                self.algorithm,
                v.len()
            );
            return Err(SortError::InvalidRange {
                left,
                right,
                buffer_len: v.len(),
            });
        }

        log::trace!(
            "{} sort, {}, range {left}..{right}",
            self.algorithm,
            self.direction
        );

        let v = &mut v[left..right];
        let mut is_less = self.direction.is_less_by(compare);

        match algorithm {
            RangeSort::Quick => quick::quicksort(v, &mut is_less, rng),
            RangeSort::Merge => merge::merge_sort(v, &mut is_less)?,
        }

        Ok(())
    }

    /// Sorts the whole of `v` through whichever contract the algorithm uses.
    pub fn sort_all<T>(&self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Clone,
    {
        self.sort_all_by(v, T::cmp)
    }

    /// Like [`Sorter::sort_all`], with `compare` as the ordering the direction is applied to.
    pub fn sort_all_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = v.len();
        match self.algorithm.entry_point() {
            EntryPoint::Length => self.sort_by(v, len, compare),
            EntryPoint::Range => {
                self.sort_range_by_with_rng(v, 0, len, compare, &mut rand::thread_rng())
            }
        }
    }

    fn wrong_entry_point(&self, called: EntryPoint) -> SortError {
        log::debug!(
            "rejecting {} sort called through the {called} contract",
            self.algorithm
        );

        SortError::WrongEntryPoint {
            algorithm: self.algorithm,
            expected: self.algorithm.entry_point(),
        }
    }
}
