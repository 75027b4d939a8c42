//! Filter, sort and page window over a list that is already in memory.
//!
//! Used for small listings the API returns whole (the token price table) or
//! for the page currently displayed. It is not a substitute for server-side
//! search and only ever reflects the rows it was given.

use crate::filter::{Searchable, matches};
use crate::sort::{SortState, Sortable};

pub struct LocalTable<T, C> {
    rows: Vec<T>,
    query: String,
    sort: Option<SortState<C>>,
    page_size: usize,
    page_index: usize,
}

impl<T, C> LocalTable<T, C>
where
    T: Searchable + Sortable<C>,
    C: Copy + PartialEq,
{
    /// A table showing `page_size` rows per window (at least one).
    pub fn new(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            query: String::new(),
            sort: None,
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    /// Replace the rows, returning to the first window.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page_index = 0;
    }

    /// Change the filter text, returning to the first window.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page_index = 0;
    }

    /// Select a sort column, flipping direction on repeat selection.
    pub fn toggle_sort(&mut self, column: C) {
        match &mut self.sort {
            Some(state) => state.toggle(column),
            None => self.sort = Some(SortState::new(column)),
        }
        self.page_index = 0;
    }

    pub fn set_sort(&mut self, sort: Option<SortState<C>>) {
        self.sort = sort;
        self.page_index = 0;
    }

    pub const fn sort_state(&self) -> Option<&SortState<C>> {
        self.sort.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every row passing the filter, in sort order.
    pub fn view(&self) -> Vec<&T> {
        let mut view: Vec<&T> = self
            .rows
            .iter()
            .filter(|row| matches(*row, &self.query))
            .collect();
        if let Some(sort) = &self.sort {
            view.sort_by(|a, b| sort.compare(*a, *b));
        }
        view
    }

    /// The rows of the current window.
    pub fn visible(&self) -> Vec<&T> {
        self.view()
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Number of windows in the filtered view (at least one).
    pub fn page_count(&self) -> usize {
        self.view().len().div_ceil(self.page_size).max(1)
    }

    /// Zero-based index of the current window.
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn next_page(&mut self) -> bool {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sort::SortDirection;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Symbol,
        Price,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Coin {
        symbol: &'static str,
        price: u32,
    }

    impl Searchable for Coin {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.symbol]
        }
    }

    impl Sortable<Col> for Coin {
        fn compare_by(&self, other: &Self, column: Col) -> Ordering {
            match column {
                Col::Symbol => self.symbol.cmp(other.symbol),
                Col::Price => self.price.cmp(&other.price),
            }
        }
    }

    fn table() -> LocalTable<Coin, Col> {
        LocalTable::new(
            vec![
                Coin { symbol: "SOL", price: 150 },
                Coin { symbol: "BTC", price: 64_000 },
                Coin { symbol: "ADA", price: 1 },
                Coin { symbol: "ETH", price: 3_000 },
                Coin { symbol: "STX", price: 2 },
            ],
            2,
        )
    }

    fn symbols(rows: &[&Coin]) -> Vec<&'static str> {
        rows.iter().map(|c| c.symbol).collect()
    }

    #[test]
    fn windows_over_sorted_view() {
        let mut table = table();
        table.toggle_sort(Col::Price);
        assert_eq!(symbols(&table.visible()), vec!["ADA", "STX"]);
        assert_eq!(table.page_count(), 3);

        assert!(table.next_page());
        assert_eq!(symbols(&table.visible()), vec!["SOL", "ETH"]);
        assert!(table.next_page());
        assert_eq!(symbols(&table.visible()), vec!["BTC"]);
        assert!(!table.next_page());
        assert!(table.previous_page());
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn query_and_sort_reset_window() {
        let mut table = table();
        table.next_page();
        table.set_query("s");
        assert_eq!(table.page_index(), 0);
        assert_eq!(symbols(&table.view()), vec!["SOL", "STX"]);

        table.next_page();
        table.toggle_sort(Col::Symbol);
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn repeated_toggle_flips_direction() {
        let mut table = table();
        table.toggle_sort(Col::Symbol);
        table.toggle_sort(Col::Symbol);
        assert_eq!(
            table.sort_state().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        assert_eq!(symbols(&table.view()), vec!["STX", "SOL", "ETH", "BTC", "ADA"]);
    }

    #[test]
    fn empty_view_still_has_one_window() {
        let mut table = table();
        table.set_query("doge");
        assert!(table.visible().is_empty());
        assert_eq!(table.page_count(), 1);
        assert!(!table.next_page());
    }
}
