use std::fmt;
use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::error::{InputError, Result};
use crate::method::CompressionMethod;
use crate::switch::ComponentSwitchPolicy;

/// Image types the compression service accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Accept `image/jpeg` or `image/png`, ignoring case and MIME parameters.
    pub fn from_mime_type(mime: &str) -> std::result::Result<Self, InputError> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            _ => Err(InputError::UnsupportedImageType(mime.to_string())),
        }
    }

    /// Detect the type from the file content.
    pub fn sniff(bytes: &[u8]) -> std::result::Result<Self, InputError> {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Jpeg) => Ok(Self::Jpeg),
            Ok(ImageFormat::Png) => Ok(Self::Png),
            Ok(other) => Err(InputError::UnsupportedImageType(format!("{other:?}"))),
            Err(_) => Err(InputError::UnsupportedImageType("unknown".to_string())),
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `num_components` is accepted by `method`.
pub fn validate_components(
    method: CompressionMethod,
    num_components: u32,
) -> std::result::Result<u32, InputError> {
    let config = method.config();
    if config.contains(num_components) {
        Ok(num_components)
    } else {
        Err(InputError::ComponentsOutOfRange {
            method,
            value: num_components,
            max: config.max_components,
        })
    }
}

/// A fully validated compression request, ready to send.
#[derive(Clone, Debug)]
pub struct CompressRequest {
    pub file_name: String,
    pub mime: ImageMime,
    pub image: Vec<u8>,
    pub method: CompressionMethod,
    pub num_components: u32,
}

impl CompressRequest {
    pub fn new(
        file_name: impl Into<String>,
        image: Vec<u8>,
        method: CompressionMethod,
        num_components: u32,
    ) -> std::result::Result<Self, InputError> {
        if image.is_empty() {
            return Err(InputError::NoImage);
        }
        let mime = ImageMime::sniff(&image)?;
        let num_components = validate_components(method, num_components)?;

        Ok(Self {
            file_name: file_name.into(),
            mime,
            image,
            method,
            num_components,
        })
    }

    /// Read and validate an image file from disk.
    ///
    /// The service picks its decoder from the file extension, so a file whose
    /// name does not match its content gets the detected extension appended.
    pub fn from_path(path: &Path, method: CompressionMethod, num_components: u32) -> Result<Self> {
        let image = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut request = Self::new(file_name, image, method, num_components)?;

        let ext = Path::new(&request.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let matches = match (request.mime, ext.as_deref()) {
            (ImageMime::Jpeg, Some("jpg" | "jpeg")) => true,
            (ImageMime::Png, Some("png")) => true,
            _ => false,
        };
        if !matches {
            debug!(
                file = %request.file_name,
                mime = %request.mime,
                "File extension does not match content"
            );
            request.file_name = format!("{}.{}", request.file_name, request.mime.extension());
        }

        Ok(request)
    }
}

/// Draft request parameters, before an image is attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UploadForm {
    method: CompressionMethod,
    num_components: u32,
    policy: ComponentSwitchPolicy,
}

impl Default for UploadForm {
    fn default() -> Self {
        let method = CompressionMethod::default();
        Self {
            method,
            num_components: method.config().default_components,
            policy: ComponentSwitchPolicy::default(),
        }
    }
}

impl UploadForm {
    pub fn new(
        method: CompressionMethod,
        num_components: u32,
        policy: ComponentSwitchPolicy,
    ) -> std::result::Result<Self, InputError> {
        Ok(Self {
            method,
            num_components: validate_components(method, num_components)?,
            policy,
        })
    }

    pub fn method(&self) -> CompressionMethod {
        self.method
    }

    pub fn num_components(&self) -> u32 {
        self.num_components
    }

    /// Switch methods, carrying the component count over through the switch
    /// policy. Returns the resulting component count.
    pub fn set_method(&mut self, method: CompressionMethod) -> u32 {
        self.num_components = self.policy.resolve(self.method, method, self.num_components);
        self.method = method;
        self.num_components
    }

    pub fn set_components(&mut self, num_components: u32) -> std::result::Result<(), InputError> {
        self.num_components = validate_components(self.method, num_components)?;
        Ok(())
    }

    /// Attach an image and produce a request.
    pub fn build(
        &self,
        file_name: impl Into<String>,
        image: Vec<u8>,
    ) -> std::result::Result<CompressRequest, InputError> {
        CompressRequest::new(file_name, image, self.method, self.num_components)
    }

    pub fn build_from_path(&self, path: &Path) -> Result<CompressRequest> {
        CompressRequest::from_path(path, self.method, self.num_components)
    }
}
