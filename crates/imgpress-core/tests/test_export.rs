mod common;

use common::{png_base64, png_bytes, raw_level, raw_result};
use imgpress_core::error::ImgpressError;
use imgpress_core::export::{
    decode_level, export_all, export_level, level_file_name, probe_dimensions,
};
use imgpress_core::method::CompressionMethod::{Dct, Svd};
use imgpress_core::result::{validate, CompressionResult, RawCompressionResult};

/// A result whose levels carry real PNG payloads of growing width.
fn png_result(method: &str, counts: &[i64]) -> CompressionResult {
    let mut raw = RawCompressionResult {
        method: method.to_string(),
        original_size: 50_000,
        component_levels: Vec::new(),
    };
    for (i, &n) in counts.iter().enumerate() {
        let mut level = raw_level(n, 100 * n);
        level.image_data = png_base64(4 + i as u32, 3);
        raw.component_levels.push(level);
    }
    validate(raw).unwrap()
}

#[test]
fn test_level_file_name() {
    assert_eq!(level_file_name(Svd, 64), "svd-064.png");
    assert_eq!(level_file_name(Dct, 5), "dct-005.png");
    assert_eq!(level_file_name(Svd, 256), "svd-256.png");
}

#[test]
fn test_probe_dimensions() {
    assert_eq!(probe_dimensions(&png_bytes(7, 5)).unwrap(), (7, 5));
}

#[test]
fn test_probe_rejects_non_image() {
    assert!(probe_dimensions(b"definitely not a picture").is_err());
}

#[test]
fn test_decode_level_roundtrips_payload() {
    let result = png_result("DCT", &[1]);
    let bytes = decode_level(result.level(0).unwrap()).unwrap();
    assert_eq!(bytes, png_bytes(4, 3));
}

#[test]
fn test_decode_level_rejects_bad_base64() {
    let result = validate(raw_result("DCT", 100, &[(1, 10)])).unwrap();
    let err = decode_level(result.level(0).unwrap()).unwrap_err();
    assert!(matches!(err, ImgpressError::Base64(_)), "got: {err:?}");
}

#[test]
fn test_export_level_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let result = png_result("SVD", &[16]);
    let path = dir.path().join("out.png");

    let exported = export_level(result.level(0).unwrap(), &path).unwrap();
    assert_eq!(exported.path, path);
    assert_eq!(exported.num_components, 16);
    assert_eq!((exported.width, exported.height), (4, 3));
    assert_eq!(std::fs::read(&path).unwrap().len(), exported.bytes);
}

#[test]
fn test_export_all_follows_level_order() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("levels");
    let result = png_result("SVD", &[1, 8, 64]);

    let exported = export_all(&result, &out).unwrap();
    let names: Vec<_> = exported
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["svd-001.png", "svd-008.png", "svd-064.png"]);
    assert_eq!(exported[2].width, 6);
    for e in &exported {
        assert!(e.path.exists());
    }
}

#[test]
fn test_export_all_fails_on_undecodable_level() {
    let dir = tempfile::tempdir().unwrap();
    let result = validate(raw_result("DCT", 100, &[(1, 10), (2, 20)])).unwrap();
    assert!(export_all(&result, dir.path()).is_err());
}
