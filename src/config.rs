//! Algorithm and direction selection.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::SortError;

/// The six available sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Shell,
    Quick,
    Merge,
}

/// The call shape an algorithm is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `sort(v, len)`, sorts the prefix `v[..len]`.
    Length,
    /// `sort_range(v, left, right)`, sorts the half-open range `v[left..right]`.
    Range,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Shell,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Shell => "shell",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Bubble, insertion, selection and shell sort take a length, merge and quick sort take a
    /// half-open range.
    pub const fn entry_point(self) -> EntryPoint {
        match self.family() {
            Family::Length(_) => EntryPoint::Length,
            Family::Range(_) => EntryPoint::Range,
        }
    }

    pub(crate) const fn family(self) -> Family {
        match self {
            Algorithm::Bubble => Family::Length(LengthSort::Bubble),
            Algorithm::Insertion => Family::Length(LengthSort::Insertion),
            Algorithm::Selection => Family::Length(LengthSort::Selection),
            Algorithm::Shell => Family::Length(LengthSort::Shell),
            Algorithm::Quick => Family::Range(RangeSort::Quick),
            Algorithm::Merge => Family::Range(RangeSort::Merge),
        }
    }
}

/// Algorithms reached through `sort(v, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthSort {
    Bubble,
    Insertion,
    Selection,
    Shell,
}

/// Algorithms reached through `sort_range(v, left, right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeSort {
    Quick,
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Length(LengthSort),
    Range(RangeSort),
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("_sort").unwrap_or(&lowered);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| SortError::UnknownName(s.to_string()))
    }
}

impl Display for EntryPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EntryPoint::Length => f.write_str("length"),
            EntryPoint::Range => f.write_str("range"),
        }
    }
}

/// Sort direction. Flips every comparison of every algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub const fn is_descending(self) -> bool {
        matches!(self, Direction::Descending)
    }

    /// Builds the strict `is_less` predicate all algorithms compare through.
    ///
    /// Ascending yields `compare(a, b) == Less`, descending yields `compare(a, b) == Greater`.
    /// The non-strict variants are derived by the algorithms as `!is_less(b, a)`.
    #[inline]
    pub fn is_less_by<T, F>(self, mut compare: F) -> impl FnMut(&T, &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let wanted = match self {
            Direction::Ascending => Ordering::Less,
            Direction::Descending => Ordering::Greater,
        };

        move |a: &T, b: &T| compare(a, b) == wanted
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(SortError::UnknownName(s.to_string())),
        }
    }
}
