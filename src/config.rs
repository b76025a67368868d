use crate::error::{Result, SonarError};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const PROGRAM_DATA_FALLBACK: &str = r"C:\ProgramData";

/// Default location of the engine's `coreProps.json`
///
/// `%ProgramData%\SteelSeries\SteelSeries Engine 3\coreProps.json`
pub fn default_core_props_path() -> PathBuf {
    let program_data = std::env::var_os("ProgramData")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(PROGRAM_DATA_FALLBACK));

    program_data
        .join("SteelSeries")
        .join("SteelSeries Engine 3")
        .join("coreProps.json")
}

#[derive(Deserialize)]
struct CoreProps {
    #[serde(rename = "ggEncryptedAddress")]
    gg_encrypted_address: String,
}

/// Engine address read from `coreProps.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    configured_address: String,
}

impl EngineConfig {
    /// Read the engine config file at `path`
    ///
    /// Fails with [`SonarError::EnginePathNotFound`] if the file does not exist.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SonarError::EnginePathNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::parse(&text)?;
        tracing::debug!(
            "Loaded engine address {} from {}",
            config.configured_address,
            path.display()
        );
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self> {
        let props: CoreProps = serde_json::from_str(text)?;
        Ok(Self {
            configured_address: props.gg_encrypted_address,
        })
    }

    /// Host and port of the engine, as written by the engine
    pub fn configured_address(&self) -> &str {
        &self.configured_address
    }

    /// HTTPS base URL of the engine
    pub fn base_url(&self) -> String {
        format!("https://{}", self.configured_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn load_builds_https_base_url() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"address": "127.0.0.1:6327", "ggEncryptedAddress": "127.0.0.1:6329"}}"#
        )
        .unwrap();

        let config = EngineConfig::load(file.path()).await.unwrap();
        assert_eq!(config.configured_address(), "127.0.0.1:6329");
        assert_eq!(config.base_url(), "https://127.0.0.1:6329");
    }

    #[tokio::test]
    async fn missing_file_is_engine_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coreProps.json");

        match EngineConfig::load(&path).await {
            Err(SonarError::EnginePathNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_field_is_a_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"address": "127.0.0.1:6327"}}"#).unwrap();

        assert!(matches!(
            EngineConfig::load(file.path()).await,
            Err(SonarError::Json(_))
        ));
    }

    #[test]
    fn default_path_ends_with_core_props() {
        let path = default_core_props_path();
        assert!(path.ends_with(
            PathBuf::from("SteelSeries")
                .join("SteelSeries Engine 3")
                .join("coreProps.json")
        ));
    }
}
