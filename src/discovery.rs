use crate::error::{Result, SonarError};
use crate::transport::Transport;
use serde::Deserialize;

const SUB_APPS_PATH: &str = "/subApps";

/// Sonar's entry in the engine's sub-app registry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub is_enabled: bool,
    pub is_ready: bool,
    pub is_running: bool,
    #[serde(default)]
    metadata: ServiceMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceMetadata {
    #[serde(default)]
    web_server_address: Option<String>,
}

#[derive(Deserialize)]
struct SubAppsResponse {
    #[serde(rename = "subApps")]
    sub_apps: SubApps,
}

#[derive(Deserialize)]
struct SubApps {
    sonar: ServiceDescriptor,
}

impl ServiceDescriptor {
    /// Raw `metadata.webServerAddress`, if the registry sent one
    pub fn web_server_address(&self) -> Option<&str> {
        self.metadata.web_server_address.as_deref()
    }

    /// Check the registry flags in order and return the usable address
    ///
    /// Enabled, then ready, then running; the first failing flag wins.
    pub fn usable_address(&self) -> Result<&str> {
        if !self.is_enabled {
            return Err(SonarError::SonarNotEnabled);
        }
        if !self.is_ready {
            return Err(SonarError::ServerNotReady);
        }
        if !self.is_running {
            return Err(SonarError::ServerNotRunning);
        }

        match self.web_server_address() {
            None | Some("") | Some("null") => Err(SonarError::WebServerAddressNotFound),
            Some(address) => Ok(address),
        }
    }
}

/// Ask the engine at `base_url` where Sonar's web server lives
pub(crate) async fn resolve_service(transport: &Transport, base_url: &str) -> Result<String> {
    let url = format!("{}{}", base_url, SUB_APPS_PATH);
    tracing::info!("Querying sub-app registry: {}", url);

    let registry: SubAppsResponse = transport.get(&url).await?;
    let sonar = registry.sub_apps.sonar;

    let address = sonar.usable_address().map_err(|e| {
        tracing::warn!("Sonar is not usable: {}", e);
        e
    })?;

    tracing::info!("Sonar web server at {}", address);
    Ok(address.to_string())
}
