//! Library entry for moviestream: a catalog client that builds queries from UI
//! state, fetches genres, movie pages and trailers from the backend, and renders
//! cards, pagination and the trailer overlay into a document model.

pub mod args;
pub mod config;
pub mod events;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
