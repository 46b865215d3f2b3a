// Core modules
mod dct;
mod loader;
mod luma;

pub mod perceptual;
pub mod types;

// Expose the hashing pipeline
pub use dct::Dct2d;
pub use loader::load_image;
pub use luma::{to_luma, LumaImage, LUMA_WEIGHTS};
pub use perceptual::{calculate_phash, phash_from_file, PerceptualHasher};
pub use types::{PHash, HEX_WIDTH};
