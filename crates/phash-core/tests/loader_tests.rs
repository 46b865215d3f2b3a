mod common;

use phash_core::{phash_from_file, Error, PerceptualHasher};
use tempfile::tempdir;

use common::{save_image, solid_image, textured_image};

#[test]
fn test_lossless_formats_agree() {
    let temp_dir = tempdir().unwrap();
    let img = textured_image(120, 90);

    let png = phash_from_file(save_image(&img, temp_dir.path(), "pattern.png")).unwrap();
    let bmp = phash_from_file(save_image(&img, temp_dir.path(), "pattern.bmp")).unwrap();
    let tiff = phash_from_file(save_image(&img, temp_dir.path(), "pattern.tiff")).unwrap();

    assert_eq!(png, bmp);
    assert_eq!(png, tiff);
}

#[test]
fn test_textured_regression_value_from_png() {
    let temp_dir = tempdir().unwrap();
    let path = save_image(&textured_image(64, 64), temp_dir.path(), "textured.png");

    let hash = phash_from_file(&path).unwrap();
    assert_eq!(hash.to_string(), "f8e3f8aad2145682");
}

#[test]
fn test_lossy_formats_decode() {
    let temp_dir = tempdir().unwrap();
    let img = textured_image(64, 64);

    for name in ["pattern.jpg", "pattern.gif"] {
        let path = save_image(&img, temp_dir.path(), name);
        assert!(phash_from_file(&path).is_ok(), "failed to hash {}", name);
    }
}

#[test]
fn test_flat_file_fixture() {
    let temp_dir = tempdir().unwrap();
    let path = save_image(&solid_image(32, 32, [200, 40, 40]), temp_dir.path(), "flat.png");

    let hash = PerceptualHasher::default().hash_file(&path).unwrap();
    assert_eq!(hash.to_string(), "0000000000000000");
}

#[test]
fn test_missing_file_is_access_error() {
    let temp_dir = tempdir().unwrap();
    let result = phash_from_file(temp_dir.path().join("nope.png"));

    assert!(matches!(result, Err(Error::FileAccess { .. })));
}

#[test]
fn test_directory_is_access_error() {
    let temp_dir = tempdir().unwrap();
    let result = phash_from_file(temp_dir.path());

    assert!(matches!(
        result,
        Err(Error::FileAccess { .. }) | Err(Error::Decode { .. })
    ));
}

#[test]
fn test_garbage_is_decode_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("image.png");
    std::fs::write(&path, b"NOT AN IMAGE").unwrap();

    let err = phash_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("image.png"));
}

#[test]
fn test_empty_file_is_decode_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("empty.jpg");
    std::fs::write(&path, b"").unwrap();

    assert!(matches!(phash_from_file(&path), Err(Error::Decode { .. })));
}
