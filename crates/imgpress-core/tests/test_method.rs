use imgpress_core::error::InputError;
use imgpress_core::method::{method_config, CompressionMethod};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_dct_config() {
    let c = method_config(CompressionMethod::Dct);
    assert_eq!(c.max_components, 20);
    assert_eq!(c.default_components, 10);
    assert_eq!(c.label, "DCT (Discrete Cosine Transform)");
}

#[test]
fn test_svd_config() {
    let c = method_config(CompressionMethod::Svd);
    assert_eq!(c.max_components, 256);
    assert_eq!(c.default_components, 64);
    assert!(c.description.contains("1-256"), "got: {}", c.description);
}

#[test]
fn test_default_within_range_for_all_methods() {
    for &m in CompressionMethod::ALL {
        let c = m.config();
        assert!(c.max_components >= 1);
        assert!(c.contains(c.default_components), "{m}: {c:?}");
    }
}

#[test]
fn test_contains_bounds() {
    let c = CompressionMethod::Dct.config();
    assert!(!c.contains(0));
    assert!(c.contains(1));
    assert!(c.contains(20));
    assert!(!c.contains(21));
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[test]
fn test_display_is_wire_identifier() {
    assert_eq!(format!("{}", CompressionMethod::Dct), "DCT");
    assert_eq!(format!("{}", CompressionMethod::Svd), "SVD");
}

#[test]
fn test_parse_case_insensitive() {
    assert_eq!("svd".parse::<CompressionMethod>(), Ok(CompressionMethod::Svd));
    assert_eq!(" Dct ".parse::<CompressionMethod>(), Ok(CompressionMethod::Dct));
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        "wavelet".parse::<CompressionMethod>(),
        Err(InputError::UnknownMethod("wavelet".into()))
    );
}

#[test]
fn test_serde_uses_wire_identifier() {
    let json = serde_json::to_string(&CompressionMethod::Svd).unwrap();
    assert_eq!(json, "\"SVD\"");
    let back: CompressionMethod = serde_json::from_str("\"DCT\"").unwrap();
    assert_eq!(back, CompressionMethod::Dct);
}

#[test]
fn test_default_method_is_dct() {
    assert_eq!(CompressionMethod::default(), CompressionMethod::Dct);
}
