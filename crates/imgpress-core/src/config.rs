use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_SERVER_URL, DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_SECS, SWITCH_PROPORTION_DIVISOR,
};
use crate::error::{ImgpressError, Result};
use crate::method::CompressionMethod;
use crate::switch::ComponentSwitchPolicy;
use crate::upload::{validate_components, UploadForm};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub compression: CompressionDefaults,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the compression service.
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the session entries. Defaults to a per-name
    /// directory under the system temp dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    pub name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: None,
            name: DEFAULT_SESSION_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            std::env::temp_dir()
                .join("imgpress")
                .join(format!("session-{}", self.name))
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionDefaults {
    pub method: CompressionMethod,
    /// Preselected component count; the method default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_components: Option<u32>,
    pub switch_divisor: f64,
}

impl Default for CompressionDefaults {
    fn default() -> Self {
        Self {
            method: CompressionMethod::default(),
            num_components: None,
            switch_divisor: SWITCH_PROPORTION_DIVISOR,
        }
    }
}

impl CompressionDefaults {
    pub fn policy(&self) -> ComponentSwitchPolicy {
        ComponentSwitchPolicy::new(self.switch_divisor)
    }

    pub fn num_components(&self) -> u32 {
        self.num_components
            .unwrap_or(self.method.config().default_components)
    }

    /// Initial upload form built from these defaults.
    pub fn upload_form(&self) -> Result<UploadForm> {
        Ok(UploadForm::new(
            self.method,
            self.num_components(),
            self.policy(),
        )?)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.server.url.trim().is_empty() {
            return Err(ImgpressError::Config("server.url must not be empty".into()));
        }
        let divisor = self.compression.switch_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ImgpressError::Config(format!(
                "compression.switch_divisor must be a positive number (got {divisor})"
            )));
        }
        if self.session.name.trim().is_empty() {
            return Err(ImgpressError::Config("session.name must not be empty".into()));
        }
        validate_components(self.compression.method, self.compression.num_components())?;
        Ok(())
    }
}
