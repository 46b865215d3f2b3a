//! DCT-based perceptual image hashing.
//!
//! This library provides the components behind the `phash` tool:
//! - Image loading with distinct file access and decode failures
//! - Luma conversion, resampling and a 2D DCT-II
//! - The 64-bit perceptual hash and its hex rendering
//!
//! ```no_run
//! use phash_core::phash_from_file;
//!
//! let hash = phash_from_file("photo.jpg")?;
//! println!("{}", hash);
//! # Ok::<(), phash_core::Error>(())
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use processing::{calculate_phash, load_image, phash_from_file, PHash, PerceptualHasher};

// -- Public Modules --
pub mod config;
pub mod logging;
pub mod processing;
