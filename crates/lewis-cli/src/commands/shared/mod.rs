pub mod limit;
pub mod records;
