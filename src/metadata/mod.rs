//! Title metadata: name, release date, posters and trailer for a post.
//!
//! # Module layout
//!
//! - [`provider`] -- [`TitleSource`] trait and the [`TitleMetadata`] it returns.
//! - [`providers`] -- Concrete sources (TMDB).
//! - [`poster`] -- Poster path to asset URL resolution.

pub mod poster;
pub mod provider;
pub mod providers;

pub use poster::{poster_url, PosterSize, MAX_POSTERS};
pub use provider::{TitleMetadata, TitleSource};
pub use providers::TmdbProvider;
