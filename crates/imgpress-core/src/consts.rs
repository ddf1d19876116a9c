/// Divisor of the proportionality check in the method-switch policy: a value
/// below `new_max / SWITCH_PROPORTION_DIVISOR` is reset to the new default.
pub const SWITCH_PROPORTION_DIVISOR: f64 = 3.0;

/// Session storage key holding the serialized compression result.
pub const RESULT_KEY: &str = "img-compress-data";

/// Session storage key holding the selected level index.
pub const SELECTED_KEY: &str = "img-compress-selected";

/// Bytes per kilobyte used by every size metric.
pub const BYTES_PER_KB: f64 = 1024.0;

/// Default compression service endpoint.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds. Compression of large images on the
/// service side routinely takes tens of seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Session name used when neither config, env nor flag provides one.
pub const DEFAULT_SESSION_NAME: &str = "default";

/// Thread name of the compression service worker.
pub const SERVICE_WORKER_NAME: &str = "imgpress-service";
