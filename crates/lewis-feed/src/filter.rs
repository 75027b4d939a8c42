//! Case-insensitive substring filter over already-fetched items.
//!
//! This only sees the page in memory. Searching the whole collection is the
//! API's job; see [`crate::SearchDebouncer`].

/// An item exposing the text fields a filter looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Whether `item` matches `needle`.
///
/// A blank needle matches everything; otherwise any field, case-folded,
/// must contain the case-folded needle.
pub fn matches<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the items matching `needle`, in their original order.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], needle: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, needle)).collect()
}
