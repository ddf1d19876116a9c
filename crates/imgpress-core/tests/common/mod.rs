#![allow(dead_code)]

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage};

use imgpress_core::error::StorageError;
use imgpress_core::persist::{MemoryStorage, SessionStorage};
use imgpress_core::result::{validate, CompressionResult, RawComponentLevel, RawCompressionResult};

/// Encode a small gradient image in the given format.
pub fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("encode image");
    buf.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Jpeg)
}

pub fn png_base64(width: u32, height: u32) -> String {
    STANDARD.encode(png_bytes(width, height))
}

/// Build a raw level with a placeholder payload.
pub fn raw_level(num_components: i64, data_size: i64) -> RawComponentLevel {
    RawComponentLevel {
        num_components,
        data_size,
        image_data: format!("payload-{num_components}"),
    }
}

/// Build a raw result from `(num_components, data_size)` pairs.
pub fn raw_result(method: &str, original_size: i64, levels: &[(i64, i64)]) -> RawCompressionResult {
    RawCompressionResult {
        method: method.to_string(),
        original_size,
        component_levels: levels.iter().map(|&(n, s)| raw_level(n, s)).collect(),
    }
}

pub fn result_json(method: &str, original_size: i64, levels: &[(i64, i64)]) -> Vec<u8> {
    serde_json::to_vec(&raw_result(method, original_size, levels)).expect("serialize raw result")
}

/// A validated three-level DCT result.
pub fn three_level_result() -> CompressionResult {
    validate(raw_result("DCT", 100_000, &[(1, 2_000), (5, 8_000), (10, 20_000)]))
        .expect("valid result")
}

pub fn three_level_json() -> Vec<u8> {
    result_json("DCT", 100_000, &[(1, 2_000), (5, 8_000), (10, 20_000)])
}

/// Memory storage whose writes fail for one key.
#[derive(Default)]
pub struct FailingStorage {
    pub inner: MemoryStorage,
    pub fail_key: Option<&'static str>,
    pub fail_reads: bool,
}

impl FailingStorage {
    pub fn failing_writes_to(key: &'static str) -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_key: Some(key),
            fail_reads: false,
        }
    }
}

impl SessionStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_key == Some(key) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}
