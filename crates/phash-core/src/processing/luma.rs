use image::{DynamicImage, ImageBuffer, Luma};

/// Single-channel image with luma in [0, 1]
pub type LumaImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Grayscale formula: 0.299*R + 0.587*G + 0.114*B
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Convert an image to floating point luma, ignoring alpha.
///
/// Channels are read through `to_rgb32f` so 16-bit sources keep their
/// precision. Values are clamped to [0, 1] because the resampler clamps
/// floating point pixels to that range anyway.
pub fn to_luma(img: &DynamicImage) -> LumaImage {
    let rgb = img.to_rgb32f();

    ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
        let pixel = rgb.get_pixel(x, y);
        let gray = LUMA_WEIGHTS[0] * pixel[0]
            + LUMA_WEIGHTS[1] * pixel[1]
            + LUMA_WEIGHTS[2] * pixel[2];
        Luma([gray.clamp(0.0, 1.0)])
    })
}
