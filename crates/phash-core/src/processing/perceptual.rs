//! # Perceptual Hashing Module
//!
//! DCT-based perceptual hash ("pHash"). Perceptual hashing generates
//! "fingerprints" that remain similar for visually similar images, unlike
//! cryptographic hashes where minor changes produce completely different outputs.
//!
//! ## Algorithm
//!
//! 1. Convert to luma with weights 0.299 R + 0.587 G + 0.114 B, values in [0, 1]
//! 2. Resample to a `sample_size` square (32x32 by default, bilinear filter)
//! 3. Apply a 2D DCT-II in double precision
//! 4. Keep the top-left 8x8 block of coefficients in raster order; index 0 is the DC term
//! 5. Take the median of the 63 AC coefficients
//! 6. Set bit `i` (`1 << i`) when coefficient `i` is greater than the median
//!    (by more than `tie_tolerance`, zero by default)
//!
//! The DC term only encodes overall brightness, so bit 0 is always clear. The
//! median of 63 values is itself one of the coefficients, so every hash has at
//! most 31 bits set. Coefficients equal to the median always map to 0.
//!
//! A sample with no variation has no AC energy at all and hashes to
//! `0000000000000000`. This covers uniformly coloured images of any size,
//! including a 1x1 image, which is flat once upscaled.
//!
//! ## Hamming Distance Interpretation
//!
//! - 0-3: Nearly identical images (same image with minor modifications)
//! - 4-10: Similar images (same subject with moderate differences)
//! - >10: Different images
//!
//! ## References
//!
//! - "Implementation and Benchmarking of Perceptual Image Hash Functions" by Christoph Zauner

use std::path::Path;

use image::imageops;
use image::{DynamicImage, GenericImageView};
use log::debug;
use ndarray::Array2;

use super::dct::Dct2d;
use super::loader::load_image;
use super::luma::to_luma;
use super::types::PHash;
use crate::config::{HashConfig, HASH_BLOCK};
use crate::error::{Error, Result};

/// Largest luma spread still treated as a flat sample
const FLAT_EPSILON: f64 = 1e-6;

/// Computes 64-bit DCT perceptual hashes with a fixed configuration.
///
/// The DCT is planned once, so a single hasher can be reused (and shared
/// between threads) for any number of images.
pub struct PerceptualHasher {
    config: HashConfig,
    dct: Dct2d,
}

impl Default for PerceptualHasher {
    fn default() -> Self {
        let config = HashConfig::default();
        let dct = Dct2d::new(config.sample_size as usize);
        Self { config, dct }
    }
}

impl PerceptualHasher {
    /// Create a hasher after validating `config`
    pub fn new(config: &HashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            dct: Dct2d::new(config.sample_size as usize),
        })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Calculate the perceptual hash of a decoded image
    pub fn hash(&self, img: &DynamicImage) -> Result<PHash> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }

        let size = self.config.sample_size;
        if width < size || height < size {
            debug!(
                "Upscaling {}x{} image to the {}x{} sample",
                width, height, size, size
            );
        }

        let luma = to_luma(img);
        let small = imageops::resize(&luma, size, size, self.config.filter.into());

        let n = size as usize;
        let sample = Array2::from_shape_fn((n, n), |(y, x)| {
            small.get_pixel(x as u32, y as u32)[0] as f64
        });

        if is_flat(&sample) {
            debug!("Sample has no variation, returning the flat hash");
            return Ok(PHash(0));
        }

        let coefficients = self.dct.transform(sample)?;
        let hash = hash_from_coefficients(&coefficients, self.config.tie_tolerance);
        debug!("Computed perceptual hash {}", hash);

        Ok(hash)
    }

    /// Calculate the perceptual hash of an image file
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<PHash> {
        let img = load_image(path)?;
        self.hash(&img)
    }
}

/// Calculate a perceptual hash for an image with the default configuration
pub fn calculate_phash(img: &DynamicImage) -> Result<PHash> {
    PerceptualHasher::default().hash(img)
}

/// Calculate a perceptual hash from an image file with the default configuration
pub fn phash_from_file<P: AsRef<Path>>(path: P) -> Result<PHash> {
    PerceptualHasher::default().hash_file(path)
}

fn is_flat(sample: &Array2<f64>) -> bool {
    let (min, max) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    max - min <= FLAT_EPSILON
}

/// Top-left `HASH_BLOCK` square in raster order
fn low_frequency_block(coefficients: &Array2<f64>) -> [f64; HASH_BLOCK * HASH_BLOCK] {
    let mut block = [0.0; HASH_BLOCK * HASH_BLOCK];
    for v in 0..HASH_BLOCK {
        for u in 0..HASH_BLOCK {
            block[v * HASH_BLOCK + u] = coefficients[[v, u]];
        }
    }
    block
}

/// Middle element of an odd-length slice. Sorts in place.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    values[values.len() / 2]
}

/// Collapse a DCT matrix (at least `HASH_BLOCK` square) into hash bits
fn hash_from_coefficients(coefficients: &Array2<f64>, tie_tolerance: f64) -> PHash {
    let block = low_frequency_block(coefficients);

    let mut ac = block[1..].to_vec();
    let median = median(&mut ac);

    // Bit 0 is the DC term and stays clear
    let mut hash: u64 = 0;
    for (bit_pos, &coefficient) in block.iter().enumerate().skip(1) {
        if coefficient - median > tie_tolerance {
            hash |= 1u64 << bit_pos;
        }
    }

    PHash(hash)
}
