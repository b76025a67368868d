use crate::client::SonarClient;
use crate::error::{Result, SonarError};
use crate::types::{AudioDevice, MuteFlag, StreamerSlider, Volume};
use serde_json::Value;

impl SonarClient {
    // ========== Volume Control ==========

    /// Get the volume tree for the current volume namespace
    pub async fn get_volume_data(&self) -> Result<Value> {
        let url = self.session.url(self.session.volume_path());
        self.mixer.get(&url).await
    }

    /// Set a channel's volume (`0.0..=1.0`)
    ///
    /// `slider` picks the streamer slider and defaults to `streaming`; it is
    /// ignored in classic mode. Nothing is sent if validation fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use steelseries_sonar::SonarClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SonarClient::new().await?;
    /// client.set_volume("chatRender", 0.8, None).await?;
    /// client.set_volume("game", 0.25, Some("monitoring")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_volume(
        &self,
        channel: &str,
        volume: Volume,
        slider: Option<&str>,
    ) -> Result<Value> {
        let channel_path = self.session.channel_path(channel, slider)?;
        if !(0.0..=1.0).contains(&volume) {
            return Err(SonarError::InvalidVolume(volume));
        }

        let url = self.session.url(&format!(
            "{}/Volume/{}",
            channel_path,
            serde_json::to_string(&volume)?
        ));
        self.mixer.put(&url).await
    }

    // ========== Mute Control ==========

    /// Mute or unmute a channel
    ///
    /// `muted` accepts anything convertible to [`MuteFlag`], e.g. `true`, `1`
    /// or `"True"`.
    pub async fn mute_channel(
        &self,
        channel: &str,
        muted: impl Into<MuteFlag>,
        slider: Option<&str>,
    ) -> Result<Value> {
        let channel_path = self.session.channel_path(channel, slider)?;
        let muted = muted.into().is_muted();

        let url = self.session.url(&format!(
            "{}/{}/{}",
            channel_path,
            self.session.mute_keyword(),
            muted
        ));
        self.mixer.put(&url).await
    }

    // ========== Chat Mix ==========

    pub async fn get_chat_mix_data(&self) -> Result<Value> {
        let url = self.session.url("/chatMix");
        self.mixer.get(&url).await
    }

    /// Set the game/chat balance, from `-1.0` (all game) to `1.0` (all chat)
    pub async fn set_chat_mix(&self, balance: f64) -> Result<Value> {
        if !(-1.0..=1.0).contains(&balance) {
            return Err(SonarError::InvalidMixVolume(balance));
        }

        let url = self.session.url(&format!(
            "/chatMix?balance={}",
            serde_json::to_string(&balance)?
        ));
        self.mixer.put(&url).await
    }

    // ========== Audio Devices ==========

    pub async fn get_audio_devices(&self) -> Result<Vec<AudioDevice>> {
        let url = self.session.url("/audioDevices");
        self.mixer.get(&url).await
    }

    /// Find a device by its exact friendly name
    pub async fn find_audio_device(&self, friendly_name: &str) -> Result<Option<AudioDevice>> {
        let devices = self.get_audio_devices().await?;
        Ok(devices
            .into_iter()
            .find(|device| device.friendly_name == friendly_name))
    }

    /// Redirect a streamer slider to an output device
    ///
    /// `device_id` should come from [`get_audio_devices`](Self::get_audio_devices).
    /// `slider` defaults to `streaming` and is passed through unchecked.
    pub async fn set_audio_device(&self, device_id: &str, slider: Option<&str>) -> Result<Value> {
        let slider = slider.unwrap_or(StreamerSlider::default().as_str());
        let url = self
            .session
            .url(&format!("/streamRedirections/{}/deviceId/{}", slider, device_id));
        self.mixer.put(&url).await
    }

    // ========== Device Routing ==========
    //
    // Sonar's routing endpoints are undocumented; treat both as best-effort.

    pub async fn get_audio_device_routing(&self) -> Result<Value> {
        let url = self.session.url("/AudioDeviceRouting");
        self.mixer.get(&url).await
    }

    /// Route one process's playback to a render device
    pub async fn set_app_routing(&self, device_id: &str, process_id: u32) -> Result<Value> {
        let url = self.session.url(&format!(
            "/AudioDeviceRouting/render/{}/{}",
            device_id, process_id
        ));
        self.mixer.put(&url).await
    }
}
