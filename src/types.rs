use crate::error::SonarError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Device identifier as reported by `/audioDevices`
pub type DeviceId = String;

/// Volume on the linear `0.0..=1.0` scale
pub type Volume = f64;

/// Mixer channel
///
/// The set is fixed by the Sonar engine. `ChatCapture` is the microphone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Master,
    Game,
    ChatRender,
    Media,
    Aux,
    ChatCapture,
}

impl Channel {
    /// All channels in the order the engine lists them
    pub const ALL: [Channel; 6] = [
        Channel::Master,
        Channel::Game,
        Channel::ChatRender,
        Channel::Media,
        Channel::Aux,
        Channel::ChatCapture,
    ];

    /// Wire name used in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Master => "master",
            Channel::Game => "game",
            Channel::ChatRender => "chatRender",
            Channel::Media => "media",
            Channel::Aux => "aux",
            Channel::ChatCapture => "chatCapture",
        }
    }
}

impl FromStr for Channel {
    type Err = SonarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SonarError::ChannelNotFound(s.to_string()))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Streamer mode slider
///
/// Only meaningful while the engine is in streamer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamerSlider {
    #[default]
    Streaming,
    Monitoring,
}

impl StreamerSlider {
    pub const ALL: [StreamerSlider; 2] = [StreamerSlider::Streaming, StreamerSlider::Monitoring];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamerSlider::Streaming => "streaming",
            StreamerSlider::Monitoring => "monitoring",
        }
    }
}

impl FromStr for StreamerSlider {
    type Err = SonarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamerSlider::ALL
            .into_iter()
            .find(|slider| slider.as_str() == s)
            .ok_or_else(|| SonarError::SliderNotFound(s.to_string()))
    }
}

impl fmt::Display for StreamerSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized mute request
///
/// Accepts the loosely typed inputs callers tend to pass around. Only `true`,
/// `1`, `"true"`, `"True"` and `"1"` mean muted; everything else unmutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteFlag(bool);

impl MuteFlag {
    pub fn is_muted(self) -> bool {
        self.0
    }

    fn from_text(text: &str) -> Self {
        Self(matches!(text, "true" | "True" | "1"))
    }
}

impl From<bool> for MuteFlag {
    fn from(muted: bool) -> Self {
        Self(muted)
    }
}

impl From<i64> for MuteFlag {
    fn from(value: i64) -> Self {
        Self(value == 1)
    }
}

impl From<i32> for MuteFlag {
    fn from(value: i32) -> Self {
        Self(value == 1)
    }
}

impl From<u8> for MuteFlag {
    fn from(value: u8) -> Self {
        Self(value == 1)
    }
}

impl From<&str> for MuteFlag {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<&String> for MuteFlag {
    fn from(text: &String) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for MuteFlag {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

/// Audio device entry from `/audioDevices`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDevice {
    pub id: DeviceId,

    #[serde(default)]
    pub friendly_name: String,

    /// Render or capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_flow: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Fields this crate does not model, kept as sent by the engine
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_round_trip_through_from_str() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn unknown_channel_is_rejected_with_its_name() {
        match "mic".parse::<Channel>() {
            Err(SonarError::ChannelNotFound(name)) => assert_eq!(name, "mic"),
            other => panic!("unexpected result: {:?}", other),
        }
        // Matching is case sensitive
        assert!("Game".parse::<Channel>().is_err());
    }

    #[test]
    fn unknown_slider_is_rejected_with_its_name() {
        assert_eq!(
            "monitoring".parse::<StreamerSlider>().unwrap(),
            StreamerSlider::Monitoring
        );
        match "classic".parse::<StreamerSlider>() {
            Err(SonarError::SliderNotFound(name)) => assert_eq!(name, "classic"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn mute_flag_accepts_only_the_documented_truthy_inputs() {
        assert!(MuteFlag::from(true).is_muted());
        assert!(MuteFlag::from("true").is_muted());
        assert!(MuteFlag::from("True").is_muted());
        assert!(MuteFlag::from(1i64).is_muted());
        assert!(MuteFlag::from(1i32).is_muted());
        assert!(MuteFlag::from("1").is_muted());
        assert!(MuteFlag::from(String::from("True")).is_muted());

        assert!(!MuteFlag::from(false).is_muted());
        assert!(!MuteFlag::from("TRUE").is_muted());
        assert!(!MuteFlag::from("yes").is_muted());
        assert!(!MuteFlag::from("").is_muted());
        assert!(!MuteFlag::from(2i64).is_muted());
        assert!(!MuteFlag::from(0u8).is_muted());
        assert!(!MuteFlag::from(" true").is_muted());
    }

    #[test]
    fn audio_device_keeps_unknown_fields() {
        let device: AudioDevice = serde_json::from_value(serde_json::json!({
            "id": "{0.0.0.00000000}.{abc}",
            "friendlyName": "Speakers",
            "dataFlow": "render",
            "isVad": false
        }))
        .unwrap();

        assert_eq!(device.friendly_name, "Speakers");
        assert_eq!(device.data_flow.as_deref(), Some("render"));
        assert_eq!(device.role, None);
        assert_eq!(device.extra.get("isVad"), Some(&serde_json::json!(false)));
    }
}
