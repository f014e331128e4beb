//! Concrete title source implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`TitleSource`](super::TitleSource) trait.

pub mod tmdb;

pub use tmdb::TmdbProvider;
