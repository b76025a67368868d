use crate::error::{Result, SonarError};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Certificate verification policy for one leg of the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Verify server certificates
    Verify,
    /// Accept any certificate, including the engine's self-signed one
    AcceptInvalidCerts,
}

/// Per-client transport settings
///
/// The engine's discovery endpoint presents a self-signed certificate, so
/// discovery skips verification by default while mixer calls keep it on.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Policy for `/subApps` and the construction-time mode probe
    pub discovery_tls: TlsPolicy,
    /// Policy for every call to the resolved mixer address
    pub mixer_tls: TlsPolicy,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            discovery_tls: TlsPolicy::AcceptInvalidCerts,
            mixer_tls: TlsPolicy::Verify,
            timeout: None,
        }
    }
}

/// HTTP transport: one request per call, 200 or bust
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    tls: TlsPolicy,
}

impl Transport {
    pub fn new(tls: TlsPolicy, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(tls == TlsPolicy::AcceptInvalidCerts);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            tls,
        })
    }

    #[cfg(test)]
    pub fn tls(&self) -> TlsPolicy {
        self.tls
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send(Method::GET, url).await
    }

    pub async fn put<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send(Method::PUT, url).await
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, url: &str) -> Result<T> {
        tracing::debug!("Sending: {} {}", method, url);

        let response = self.http.request(method, url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Request to {} failed with status {}", url, status);
            return Err(SonarError::ServerNotAccessible(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!("Received: {}", body);

        Ok(serde_json::from_str(&body)?)
    }
}
