//! Postforge - release post builder for hosted media links
//!
//! The pipeline runs from a pasted hosting link to publishable block markup:
//!
//! 1. [`drive::extract`] pulls a file or folder id out of the link.
//! 2. A [`drive::MetadataResolver`] looks the id up and returns raw entries.
//! 3. [`classify::classify`] infers quality, print type and audio from each
//!    file name.
//! 4. [`links::LinkCollection`] accumulates the classified links in order.
//! 5. [`markup::MarkupRenderer`] turns a [`markup::PostModel`] into markup.
//!
//! [`session::Session`] ties the steps together for one post, and
//! [`metadata`] supplies the title, posters and trailer.

pub mod classify;
pub mod config;
pub mod drive;
pub mod links;
pub mod markup;
pub mod metadata;
pub mod session;
