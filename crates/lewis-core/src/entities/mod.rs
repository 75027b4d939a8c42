//! Display records for every listing the API serves.
//!
//! Records are projections of backend data: the client never mutates them
//! except to append a freshly posted comment or answer to a local list.
//! Optional fields default when the API omits them, so a record with a
//! missing image or tag list still deserializes.

mod article;
mod comment;
mod guide;
mod question;
mod search;
mod token;

pub use article::Article;
pub use comment::Comment;
pub use guide::Guide;
pub use question::{Answer, Question};
pub use search::SearchHit;
pub use token::Token;
