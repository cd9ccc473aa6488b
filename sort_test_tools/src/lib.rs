/// Implemented by every sort under test, one zero-sized type per configuration.
pub trait Sort {
    /// Set if the implementation orders largest first.
    const DESCENDING: bool = false;

    /// Set if equal elements are guaranteed to keep their relative order.
    const STABLE: bool = false;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    /// Sorts by `compare`, with the implementation's direction applied on top of it.
    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
