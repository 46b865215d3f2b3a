#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma, Rgb, RgbImage};

/// Smooth, asymmetric test pattern defined on normalised coordinates so that
/// rendering it at a different size gives the same picture.
pub fn textured_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let fx = x as f64 / width as f64;
        let fy = y as f64 / height as f64;

        let waves = 0.22 * (6.1 * fx + 0.7).sin() * (4.3 * fy - 0.3).cos();
        let blob = 0.15 * (-((fx - 0.3).powi(2) + (fy - 0.65).powi(2)) / 0.02).exp();
        let ripple = 0.12 * (9.7 * fx * fy + 1.1).cos();
        let v = 0.5 + waves + blob - ripple;

        Rgb([
            to_channel(v),
            to_channel(v * 0.9 + 0.05),
            to_channel(0.3 + 0.4 * fy),
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// Concentric rings around an off-centre point
pub fn ring_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let fx = x as f64 / width as f64 - 0.62;
        let fy = y as f64 / height as f64 - 0.38;
        let r = (fx * fx + fy * fy).sqrt();
        let v = 0.5 + 0.4 * (18.0 * r).cos();
        Rgb([to_channel(v), to_channel(1.0 - v), to_channel(0.5)])
    });
    DynamicImage::ImageRgb8(img)
}

/// Two-level pattern that differs by a single grey level
pub fn low_contrast_image(width: u32, height: u32) -> DynamicImage {
    let img = GrayImage::from_fn(width, height, |x, y| {
        Luma([128 + ((x * 3 + y * y) / 7 % 2) as u8])
    });
    DynamicImage::ImageLuma8(img)
}

pub fn solid_image(width: u32, height: u32, colour: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour)))
}

/// Re-encode through JPEG at the given quality
pub fn jpeg_round_trip(img: &DynamicImage, quality: u8) -> DynamicImage {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Jpeg(quality))
        .unwrap();
    image::load_from_memory(&bytes).unwrap()
}

/// Save `img` under `dir` and return the path
pub fn save_image(img: &DynamicImage, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Count of differing bits
pub fn hamming(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
