use std::cmp::Ordering;

use classic_sort::{Algorithm, Direction, EntryPoint, Sorter};
use sort_test_tools::{patterns, Sort};

/// Sorts all of `v` through the entry point `sorter` expects.
///
/// Range sorts draw from a generator seeded with the process seed, so two calls on the same input
/// perform the same comparisons.
fn run<T, F>(sorter: Sorter, v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let result = match sorter.algorithm().entry_point() {
        EntryPoint::Length => sorter.sort_by(v, len, compare),
        EntryPoint::Range => {
            sorter.sort_range_by_with_rng(v, 0, len, compare, &mut patterns::seeded_rng())
        }
    };

    result.unwrap();
}

macro_rules! sort_suite {
    ($algorithm:ident, $direction:ident, stable = $stable:literal) => {
        paste::paste! {
            mod [<$algorithm:snake _ $direction:snake>] {
                use super::*;

                struct SortImpl;

                impl Sort for SortImpl {
                    const DESCENDING: bool = Direction::$direction.is_descending();
                    const STABLE: bool = $stable;

                    fn name() -> String {
                        format!("{}_{}", Algorithm::$algorithm, Direction::$direction)
                    }

                    fn sort<T>(arr: &mut [T])
                    where
                        T: Ord + Clone,
                    {
                        run(Sorter::new(Algorithm::$algorithm, Direction::$direction), arr, T::cmp);
                    }

                    fn sort_by<T, F>(arr: &mut [T], compare: F)
                    where
                        T: Clone,
                        F: FnMut(&T, &T) -> Ordering,
                    {
                        run(Sorter::new(Algorithm::$algorithm, Direction::$direction), arr, compare);
                    }
                }

                sort_test_tools::instantiate_sort_tests!(SortImpl);
            }
        }
    };
}

sort_suite!(Bubble, Ascending, stable = true);
sort_suite!(Bubble, Descending, stable = true);
sort_suite!(Insertion, Ascending, stable = true);
sort_suite!(Insertion, Descending, stable = true);
sort_suite!(Selection, Ascending, stable = false);
sort_suite!(Selection, Descending, stable = false);
sort_suite!(Shell, Ascending, stable = false);
sort_suite!(Shell, Descending, stable = false);
sort_suite!(Quick, Ascending, stable = false);
sort_suite!(Quick, Descending, stable = false);
sort_suite!(Merge, Ascending, stable = true);
sort_suite!(Merge, Descending, stable = true);
