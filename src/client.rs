use crate::config::{default_core_props_path, EngineConfig};
use crate::discovery::resolve_service;
use crate::error::Result;
use crate::transport::{ClientOptions, Transport};
use crate::types::{Channel, StreamerSlider};
use serde_json::Value;
use std::path::PathBuf;

pub(crate) const CLASSIC_VOLUME_PATH: &str = "/volumeSettings/classic";
pub(crate) const STREAMER_VOLUME_PATH: &str = "/volumeSettings/streamer";

const MODE_STREAM: &str = "stream";
const MODE_CLASSIC: &str = "classic";

/// Addresses and mode resolved while constructing a [`SonarClient`]
#[derive(Debug, Clone)]
pub struct ClientSession {
    base_url: String,
    web_server_address: String,
    streamer_mode: bool,
    volume_path: &'static str,
}

impl ClientSession {
    pub(crate) fn new(base_url: String, web_server_address: String, streamer_mode: bool) -> Self {
        let volume_path = if streamer_mode {
            STREAMER_VOLUME_PATH
        } else {
            CLASSIC_VOLUME_PATH
        };

        Self {
            base_url,
            web_server_address,
            streamer_mode,
            volume_path,
        }
    }

    /// HTTPS address of the engine
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of Sonar's own web server
    pub fn web_server_address(&self) -> &str {
        &self.web_server_address
    }

    /// Whether volume and mute calls address streamer sliders
    pub fn streamer_mode(&self) -> bool {
        self.streamer_mode
    }

    /// Root of the volume settings namespace
    ///
    /// Fixed at construction. A later mode switch changes slider handling and
    /// the mute keyword but not this path.
    pub fn volume_path(&self) -> &str {
        self.volume_path
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.web_server_address, path)
    }

    /// Validated `{volume_path}[/slider]/{channel}` path
    ///
    /// The slider is only looked at in streamer mode and defaults to `streaming`.
    pub(crate) fn channel_path(&self, channel: &str, slider: Option<&str>) -> Result<String> {
        let channel: Channel = channel.parse()?;

        if self.streamer_mode {
            let slider = match slider {
                Some(name) => name.parse()?,
                None => StreamerSlider::default(),
            };
            Ok(format!("{}/{}/{}", self.volume_path, slider, channel))
        } else {
            Ok(format!("{}/{}", self.volume_path, channel))
        }
    }

    pub(crate) fn mute_keyword(&self) -> &'static str {
        if self.streamer_mode {
            "isMuted"
        } else {
            "Mute"
        }
    }
}

/// Builder for [`SonarClient`]
///
/// # Example
///
/// ```no_run
/// use steelseries_sonar::{ClientOptions, SonarClient};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SonarClient::builder()
///         .core_props_path(r"D:\ProgramData\SteelSeries\SteelSeries Engine 3\coreProps.json")
///         .options(ClientOptions {
///             timeout: Some(Duration::from_secs(5)),
///             ..ClientOptions::default()
///         })
///         .build()
///         .await?;
///     println!("Sonar at {}", client.session().web_server_address());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SonarClientBuilder {
    core_props_path: Option<PathBuf>,
    base_url: Option<String>,
    streamer_mode: Option<bool>,
    options: ClientOptions,
}

impl SonarClientBuilder {
    /// Read the engine address from this `coreProps.json` instead of the default
    pub fn core_props_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.core_props_path = Some(path.into());
        self
    }

    /// Skip `coreProps.json` and query this engine base URL directly
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use this mode instead of asking the engine
    pub fn streamer_mode(mut self, streamer_mode: bool) -> Self {
        self.streamer_mode = Some(streamer_mode);
        self
    }

    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve the engine and Sonar addresses and return a ready client
    ///
    /// Runs the config lookup, the sub-app registry query and (unless a mode was
    /// given) the streamer mode probe, in that order. Any failure aborts.
    pub async fn build(self) -> Result<SonarClient> {
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => {
                let path = self.core_props_path.unwrap_or_else(default_core_props_path);
                EngineConfig::load(&path).await?.base_url()
            }
        };

        let discovery = Transport::new(self.options.discovery_tls, self.options.timeout)?;
        let mixer = Transport::new(self.options.mixer_tls, self.options.timeout)?;

        let web_server_address = resolve_service(&discovery, &base_url).await?;

        let streamer_mode = match self.streamer_mode {
            Some(streamer_mode) => streamer_mode,
            None => query_streamer_mode(&discovery, &web_server_address).await?,
        };
        tracing::info!(
            "Connected to Sonar at {} ({} mode)",
            web_server_address,
            if streamer_mode { MODE_STREAM } else { MODE_CLASSIC }
        );

        Ok(SonarClient {
            session: ClientSession::new(base_url, web_server_address, streamer_mode),
            discovery,
            mixer,
        })
    }
}

/// Client for the SteelSeries Sonar mixer
///
/// Construction discovers Sonar through the SteelSeries engine; after that
/// every operation is a single HTTP request against Sonar's web server.
#[derive(Debug)]
pub struct SonarClient {
    pub(crate) session: ClientSession,
    /// Discovery TLS policy, also used for `/mode/` reads
    discovery: Transport,
    pub(crate) mixer: Transport,
}

impl SonarClient {
    /// Connect using the default `coreProps.json` location
    ///
    /// # Example
    ///
    /// ```no_run
    /// use steelseries_sonar::SonarClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SonarClient::new().await?;
    ///     client.set_volume("game", 0.5, None).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    pub fn builder() -> SonarClientBuilder {
        SonarClientBuilder::default()
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    /// Ask Sonar whether it is in streamer mode
    ///
    /// Does not change this client's session. Uses the discovery TLS policy,
    /// like the probe run during construction.
    pub async fn is_streamer_mode(&self) -> Result<bool> {
        query_streamer_mode(&self.discovery, &self.session.web_server_address).await
    }

    /// Switch Sonar between streamer and classic mode
    ///
    /// Returns the mode Sonar reports back, which also becomes the session mode.
    pub async fn set_streamer_mode(&mut self, enabled: bool) -> Result<bool> {
        let mode = if enabled { MODE_STREAM } else { MODE_CLASSIC };
        let url = self.session.url(&format!("/mode/{}", mode));

        let reported: Value = self.mixer.put(&url).await?;
        self.session.streamer_mode = is_stream_mode(&reported);

        tracing::info!("Sonar streamer mode is now {}", self.session.streamer_mode);
        Ok(self.session.streamer_mode)
    }
}

async fn query_streamer_mode(transport: &Transport, web_server_address: &str) -> Result<bool> {
    let url = format!("{}/mode/", web_server_address);
    let mode: Value = transport.get(&url).await?;
    Ok(is_stream_mode(&mode))
}

fn is_stream_mode(mode: &Value) -> bool {
    mode.as_str() == Some(MODE_STREAM)
}
