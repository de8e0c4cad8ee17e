//! Listing request parsing

pub mod parser;
pub mod spec;

pub use parser::parse_query;
pub use spec::{QuerySpec, SortKey, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};
