use std::time::Duration;

use anyhow::{Context, Result};
use imgpress_core::config::ServerConfig;
use imgpress_core::error::TransportError;
use imgpress_core::service::CompressionService;
use imgpress_core::upload::CompressRequest;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;

const COMPRESS_PATH: &str = "/api/compress";
const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Blocking HTTP client for the compression server.
pub struct HttpCompressionService {
    client: Client,
    base_url: String,
}

impl HttpCompressionService {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(self.endpoint(HEALTH_PATH))
            .send()
            .map_err(network)?;
        let status = response.status();
        let body = response.bytes().map_err(network)?;
        if !status.is_success() {
            return Err(TransportError::from_response(status.as_u16(), &body));
        }
        serde_json::from_slice(&body)
            .map_err(|e| TransportError::Network(format!("unexpected health response: {e}")))
    }
}

fn network(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

fn compress_form(request: &CompressRequest) -> Result<Form, TransportError> {
    let image = Part::bytes(request.image.clone())
        .file_name(request.file_name.clone())
        .mime_str(request.mime.as_str())
        .map_err(network)?;
    Ok(Form::new()
        .part("image", image)
        .text("method", request.method.as_str())
        .text("numComponents", request.num_components.to_string()))
}

impl CompressionService for HttpCompressionService {
    fn compress(&self, request: &CompressRequest) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(self.endpoint(COMPRESS_PATH))
            .multipart(compress_form(request)?)
            .send()
            .map_err(network)?;

        let status = response.status();
        let body = response.bytes().map_err(network)?;
        if !status.is_success() {
            return Err(TransportError::from_response(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ServerConfig {
            url: "http://localhost:8080/".into(),
            timeout_secs: 5,
        };
        let service = HttpCompressionService::new(&config).unwrap();
        assert_eq!(service.base_url(), "http://localhost:8080");
        assert_eq!(
            service.endpoint(COMPRESS_PATH),
            "http://localhost:8080/api/compress"
        );
    }

    #[test]
    fn test_unreachable_server_is_network_error() {
        let config = ServerConfig {
            url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
        };
        let service = HttpCompressionService::new(&config).unwrap();
        assert!(matches!(service.health(), Err(TransportError::Network(_))));
    }
}
