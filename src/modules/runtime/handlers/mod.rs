//! HTTP request handlers for the bindcheck server

mod index;

pub use index::IndexHandler;
