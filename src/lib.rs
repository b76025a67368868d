//! Rust library for controlling the SteelSeries Sonar audio mixer
//!
//! Sonar runs as a sub-application of the SteelSeries engine (SteelSeries GG).
//! This library finds it the same way the vendor's own tools do and exposes
//! its local REST API:
//!
//! - Discovery via the engine's `coreProps.json` and `/subApps` registry
//! - Per-channel volume and mute control (classic and streamer mode)
//! - Chat mix balance
//! - Output device enumeration and streamer slider redirection
//! - Streamer mode switching
//!
//! # Quick Start
//!
//! ```no_run
//! use steelseries_sonar::SonarClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads %ProgramData%\SteelSeries\SteelSeries Engine 3\coreProps.json
//!     let client = SonarClient::new().await?;
//!
//!     println!("Volumes: {}", client.get_volume_data().await?);
//!
//!     client.set_volume("game", 0.75, None).await?;
//!     client.mute_channel("chatCapture", true, None).await?;
//!     client.set_chat_mix(-0.5).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Streamer Mode
//!
//! In streamer mode every channel has a `streaming` and a `monitoring` slider.
//! Volume and mute calls take an optional slider name, defaulting to
//! `streaming`:
//!
//! ```no_run
//! use steelseries_sonar::SonarClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = SonarClient::builder().streamer_mode(true).build().await?;
//!     client.set_volume("media", 0.4, Some("monitoring")).await?;
//!
//!     // Ask the engine to switch back; the engine's answer is authoritative
//!     let streamer = client.set_streamer_mode(false).await?;
//!     assert!(!streamer);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Config**: reads the engine address from `coreProps.json`
//! - **Discovery**: resolves Sonar's web server through the engine's sub-app registry
//! - **Client**: construction, session state and streamer mode
//! - **Mixer**: volume, mute, chat mix and device operations
//! - **Transport**: HTTP requests with per-client TLS policy
//! - **Types**: channels, sliders, mute flags and devices

mod client;
mod config;
mod discovery;
mod error;
mod mixer;
mod transport;
mod types;

// Public exports
pub use client::{ClientSession, SonarClient, SonarClientBuilder};
pub use config::{default_core_props_path, EngineConfig};
pub use discovery::ServiceDescriptor;
pub use error::{Result, SonarError};
pub use transport::{ClientOptions, TlsPolicy};
pub use types::{AudioDevice, Channel, DeviceId, MuteFlag, StreamerSlider, Volume};
