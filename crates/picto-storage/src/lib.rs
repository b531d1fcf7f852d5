//! Picto Storage Library
//!
//! This crate provides the image storage abstraction and its local filesystem
//! implementation.
//!
//! # File layout
//!
//! Images are stored flat in a single directory as `{file_id}{extension}`, where
//! `file_id` is a UUID v4 and `extension` is taken from the uploaded filename
//! (see the `keys` module). There is no manifest: the directory listing is the
//! only queryable state.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use picto_core::StoredImage;
pub use traits::{DeleteOutcome, ImageStorage, StorageError, StorageResult};
