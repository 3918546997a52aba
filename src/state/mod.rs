//! Client state: the query/filter/pagination store and the catalog value types.
//!
//! The store lives in [`query`]; transient response types live in [`types`].
//! Both are re-exported here so callers can use `crate::state::*`.

pub mod query;
pub mod types;

pub use query::{GenreFilter, QueryState, SortOrder};
pub use types::{Genre, MoviePage, MovieSummary, Video};
