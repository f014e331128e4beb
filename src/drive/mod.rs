//! Hosted file links: parsing pasted URLs and resolving them to file entries.
//!
//! # Module layout
//!
//! - [`link`] -- Extract a typed [`ResourceReference`](postforge_common::ResourceReference)
//!   from a pasted hosting URL.
//! - [`resolver`] -- The [`MetadataResolver`] trait and the raw entry shape it returns.
//! - [`client`] -- Drive v3 REST implementation of [`MetadataResolver`].

pub mod client;
pub mod link;
pub mod resolver;

pub use client::DriveClient;
pub use link::{download_url, extract};
pub use resolver::{MetadataResolver, RawEntry};
