//! Postforge-Common: Shared types, errors, and formatting helpers.
//!
//! This crate provides common functionality used across postforge:
//!
//! - **Core Types**: Enums for media types, link attributes, and title tags
//! - **Resource References**: Typed file/folder handles for hosted links
//! - **Error Handling**: Common error types and result aliases
//! - **Size Formatting**: Human-readable byte sizes for file listings
//!
//! # Examples
//!
//! ```
//! use postforge_common::{Error, MediaType, ResourceReference, Result};
//! use postforge_common::size::format_file_size;
//!
//! let reference = ResourceReference::file("ABC123");
//! assert_eq!(reference.id, "ABC123");
//!
//! assert_eq!(MediaType::Series.tmdb_path(), "tv");
//! assert_eq!(format_file_size(1536), "1.5 KB");
//!
//! fn example() -> Result<()> {
//!     Err(Error::EmptyInput)
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod size;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
