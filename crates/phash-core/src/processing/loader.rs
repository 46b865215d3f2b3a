use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::error::{Error, Result};

/// Open and decode an image file.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Open and read failures become `Error::FileAccess`; anything the
/// decoder rejects becomes `Error::Decode`.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_ref = path.as_ref();

    let reader = ImageReader::open(path_ref)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| {
            debug!("Failed to open {}: {}", path_ref.display(), e);
            Error::FileAccess {
                path: path_ref.to_path_buf(),
                source: e,
            }
        })?;

    debug!(
        "Decoding {} as {:?}",
        path_ref.display(),
        reader.format()
    );

    let img = reader.decode().map_err(|e| {
        debug!("Failed to decode {}: {}", path_ref.display(), e);
        Error::Decode {
            path: path_ref.to_path_buf(),
            source: e,
        }
    })?;

    let (width, height) = img.dimensions();
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path_ref.display(),
        width,
        height,
        img.color()
    );

    Ok(img)
}
