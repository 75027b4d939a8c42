pub mod browse;
pub mod config;
pub mod dispatch;
pub mod forms;
pub mod get;
pub mod listing;
pub mod schema;
pub mod search;
pub mod shared;
pub mod thread;
