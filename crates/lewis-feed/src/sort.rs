//! Stable column sort with toggling direction.

use std::cmp::Ordering;
use std::fmt;

/// An item that can be ordered by a column of type `C`.
pub trait Sortable<C> {
    fn compare_by(&self, other: &Self, column: C) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        })
    }
}

/// The selected sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> SortState<C> {
    /// Sort by `column`, ascending.
    pub const fn new(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Select `column`: the same column flips direction, another column
    /// starts ascending.
    pub fn toggle(&mut self, column: C) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::new(column);
        }
    }

    /// Compare two items under this state.
    pub fn compare<T: Sortable<C>>(&self, a: &T, b: &T) -> Ordering {
        let ordering = a.compare_by(b, self.column);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Sort in place. Equal keys keep their relative order in both directions.
    pub fn sort<T: Sortable<C>>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Order optional numbers with missing values first.
#[must_use]
pub fn compare_optional_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive text ordering.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
