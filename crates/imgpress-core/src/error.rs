use thiserror::Error;

use crate::method::CompressionMethod;

#[derive(Error, Debug)]
pub enum ImgpressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Invalid compression result: {0}")]
    InvalidPayload(#[from] ValidationError),

    #[error("Compression failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Level index {index} out of range (total: {total})")]
    LevelOutOfRange { index: usize, total: usize },

    #[error("No compression result loaded")]
    NotReady,

    #[error("No compression request in flight")]
    NoPendingRequest,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImgpressError>;

/// Problems with user input, detected before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please select an image first")]
    NoImage,

    #[error("Please select a JPG or PNG image (got {0})")]
    UnsupportedImageType(String),

    #[error("{method} accepts 1-{max} components (got {value})")]
    ComponentsOutOfRange {
        method: CompressionMethod,
        value: u32,
        max: u32,
    },

    #[error("Unknown compression method: {0}")]
    UnknownMethod(String),
}

/// Reasons a compression result fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("result has no component levels")]
    EmptyLevels,

    #[error("original size must be positive (got {0})")]
    NonPositiveOriginalSize(i64),

    #[error("level {index} has non-positive component count {value}")]
    NonPositiveComponentCount { index: usize, value: i64 },

    #[error("level {index} has negative data size {value}")]
    NegativeDataSize { index: usize, value: i64 },

    #[error("component counts not strictly increasing at level {index} ({previous} then {current})")]
    NonMonotonic {
        index: usize,
        previous: i64,
        current: i64,
    },

    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Failure of the remote compression call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Non-2xx response. Displays the server's message verbatim when it sent one.
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("request failed with status {status}"),
    }
}

/// Failure of the session storage medium.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
