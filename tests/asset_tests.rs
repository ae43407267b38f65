//! Asset Loading Tests
//!
//! Tests for:
//! - Lookup next to the executable with workspace fallback
//! - File errors carrying the path
//! - PNG decoding into RGBA8
//! - Procedural checkerboard images

use std::path::Path;

use primer::primer_core::image_data::ImageData;
use primer::primer_core::io;
use primer::PrimerError;

// ============================================================================
// File Lookup
// ============================================================================

#[test]
fn search_starts_next_to_executable() {
    let paths = io::search_paths(Path::new("textures/sample.png"));
    assert_eq!(paths.len(), 2);
    let exe_dir = io::execution_dir().unwrap();
    assert_eq!(paths[0], exe_dir.join("textures/sample.png"));
    assert!(paths[1].ends_with("assets/textures/sample.png"));
}

#[test]
fn absolute_paths_are_used_as_is() {
    let absolute = std::env::temp_dir().join("primer_absolute.png");
    assert_eq!(io::search_paths(&absolute), vec![absolute.clone()]);
}

#[test]
fn resolves_workspace_assets() {
    let path = io::resolve_asset("textures/sample.png").unwrap();
    assert!(path.is_file());
}

#[test]
fn missing_asset_is_not_found() {
    let err = io::load_asset("textures/no_such_image.png").unwrap_err();
    assert!(matches!(err, PrimerError::FileNotFound(ref name) if name.contains("no_such_image")));
}

#[test]
fn unreadable_file_reports_path() {
    let path = std::env::temp_dir().join("primer_missing_dir/nothing.bin");
    let err = io::load_binary_file(&path).unwrap_err();
    match err {
        PrimerError::FileLoad { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn text_round_trip_through_temp_file() {
    let path = std::env::temp_dir().join(format!("primer_io_{}.wgsl", std::process::id()));
    std::fs::write(&path, "// shader\n").unwrap();
    assert_eq!(io::load_text_file(&path).unwrap(), "// shader\n");
    assert_eq!(io::load_binary_file(&path).unwrap(), b"// shader\n");
    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// Images
// ============================================================================

#[test]
fn sample_texture_decodes() {
    let image = ImageData::load("textures/sample.png").unwrap();
    assert_eq!((image.width, image.height), (256, 256));
    assert_eq!(image.rgba.len(), 256 * 256 * 4);
    assert_eq!(image.bytes_per_row(), 1024);

    // Opaque centre, transparent corners.
    let alpha = |x: u32, y: u32| image.rgba[((y * image.width + x) * 4 + 3) as usize];
    assert_eq!(alpha(128, 128), 255);
    assert_eq!(alpha(0, 0), 0);
}

#[test]
fn decode_png_from_memory() {
    let mut source = image::RgbaImage::new(3, 2);
    source.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));
    let mut png = Vec::new();
    source
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let decoded = ImageData::decode(&png).unwrap();
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(&decoded.rgba[20..24], &[10, 20, 30, 40]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = ImageData::decode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PrimerError::ImageDecodeError(_)));
}

#[test]
fn checkerboard_alternates_cells() {
    let white = [255, 255, 255, 255];
    let black = [0, 0, 0, 255];
    let image = ImageData::checkerboard(8, 4, white, black);
    assert_eq!(image.rgba.len(), 8 * 8 * 4);

    let texel = |x: u32, y: u32| {
        let i = ((y * 8 + x) * 4) as usize;
        [image.rgba[i], image.rgba[i + 1], image.rgba[i + 2], image.rgba[i + 3]]
    };
    assert_eq!(texel(0, 0), white);
    assert_eq!(texel(4, 0), black);
    assert_eq!(texel(4, 4), white);
    assert_eq!(texel(7, 3), black);
}
