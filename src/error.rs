use std::path::PathBuf;
use thiserror::Error;

/// Result type for Sonar operations
pub type Result<T> = std::result::Result<T, SonarError>;

/// Errors that can occur when talking to the Sonar mixer
#[derive(Error, Debug)]
pub enum SonarError {
    /// The engine's `coreProps.json` does not exist
    #[error("SteelSeries Engine config not found at {}", .0.display())]
    EnginePathNotFound(PathBuf),

    /// An HTTP call returned something other than 200 OK
    #[error("Server not accessible (status code {0})")]
    ServerNotAccessible(u16),

    /// Sonar is installed but disabled in the engine
    #[error("Sonar is not enabled")]
    SonarNotEnabled,

    /// Sonar is enabled but its server is not ready yet
    #[error("Sonar server is not ready")]
    ServerNotReady,

    /// Sonar is enabled and ready but not running
    #[error("Sonar server is not running")]
    ServerNotRunning,

    /// The registry reported Sonar as usable but gave no address
    #[error("Sonar web server address not found")]
    WebServerAddressNotFound,

    /// Channel name outside the fixed channel set
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Slider name outside the fixed streamer slider set
    #[error("Slider not found: {0}")]
    SliderNotFound(String),

    /// Volume outside `0.0..=1.0`
    #[error("Invalid volume: {0} (expected 0.0 to 1.0)")]
    InvalidVolume(f64),

    /// Chat mix balance outside `-1.0..=1.0`
    #[error("Invalid chat mix balance: {0} (expected -1.0 to 1.0)")]
    InvalidMixVolume(f64),

    /// HTTP transport error (connection refused, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
