use dioxus::prelude::*;
use serde::Deserialize;

const DEFAULT_RECIPIENT: &str = "darilprtmsr@gmail.com";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Form-submission endpoint; empty selects the `mailto:` fallback.
    pub contact_endpoint: String,
    pub contact_recipient: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: option_env!("PORTFOLIO_CONTACT_ENDPOINT")
                .unwrap_or_default()
                .to_string(),
            contact_recipient: option_env!("PORTFOLIO_CONTACT_RECIPIENT")
                .unwrap_or(DEFAULT_RECIPIENT)
                .to_string(),
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|err| format!("config decode failed: {err}"))?;
        config.contact_endpoint = config.contact_endpoint.trim().to_string();
        if config.contact_recipient.trim().is_empty() {
            config.contact_recipient = Self::default().contact_recipient;
        }
        Ok(config)
    }
}

/// Resolves the runtime config, falling back to the build-time defaults.
pub fn use_runtime_config() -> Resource<PortfolioConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!("{message}; using build-time config");
                PortfolioConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<PortfolioConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<PortfolioConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    let raw = response
        .text()
        .await
        .map_err(|err| format!("config read failed: {err}"))?;
    PortfolioConfig::from_json(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<PortfolioConfig, String> {
    let defaults = PortfolioConfig::default();
    let contact_endpoint =
        std::env::var("PORTFOLIO_CONTACT_ENDPOINT").unwrap_or(defaults.contact_endpoint);
    let contact_recipient =
        std::env::var("PORTFOLIO_CONTACT_RECIPIENT").unwrap_or(defaults.contact_recipient);
    Ok(PortfolioConfig {
        contact_endpoint: contact_endpoint.trim().to_string(),
        contact_recipient,
    })
}
