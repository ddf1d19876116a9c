use std::path::Path;

use anyhow::{Context, Result};
use imgpress_core::browse::BrowsingController;
use imgpress_core::config::AppConfig;
use imgpress_core::persist::{FileStorage, SessionStore};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "imgpress.toml";
pub const SESSION_ENV: &str = "IMGPRESS_SESSION";

/// Resolve the effective configuration.
///
/// An explicit `--config` path must exist; otherwise `imgpress.toml` in the
/// working directory is used when present. The session name is taken from
/// the flag, then the environment, then the file.
pub fn load_config(path: Option<&Path>, session: Option<&str>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            read_config(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    apply_session_override(&mut config, std::env::var(SESSION_ENV).ok(), session);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn apply_session_override(config: &mut AppConfig, env: Option<String>, flag: Option<&str>) {
    if let Some(name) = flag.map(str::to_string).or(env) {
        config.session.name = name;
    }
}

pub fn open_store(config: &AppConfig) -> SessionStore<FileStorage> {
    let dir = config.session.resolve_dir();
    debug!(dir = %dir.display(), "Using session directory");
    SessionStore::new(FileStorage::new(dir))
}

pub fn open_controller(config: &AppConfig) -> BrowsingController<FileStorage> {
    BrowsingController::new(open_store(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgpress_core::method::CompressionMethod;

    #[test]
    fn test_read_config_fills_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imgpress.toml");
        std::fs::write(
            &path,
            "[server]\nurl = \"http://compress.local:9000\"\n\n[compression]\nmethod = \"SVD\"\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.server.url, "http://compress.local:9000");
        assert_eq!(config.server.timeout_secs, 120);
        assert_eq!(config.compression.method, CompressionMethod::Svd);
        assert_eq!(config.compression.num_components(), 64);
        assert_eq!(config.session.name, "default");
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml")), None).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[compression]\nswitch_divisor = -1.0\n").unwrap();
        assert!(load_config(Some(&path), None).is_err());
    }

    #[test]
    fn test_session_flag_beats_env() {
        let mut config = AppConfig::default();
        apply_session_override(&mut config, Some("from-env".into()), Some("from-flag"));
        assert_eq!(config.session.name, "from-flag");

        apply_session_override(&mut config, Some("from-env".into()), None);
        assert_eq!(config.session.name, "from-env");

        apply_session_override(&mut config, None, None);
        assert_eq!(config.session.name, "from-env");
    }

    #[test]
    fn test_default_config_survives_toml_roundtrip() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.server.url, AppConfig::default().server.url);
        assert_eq!(back.compression.switch_divisor, 3.0);
    }
}
