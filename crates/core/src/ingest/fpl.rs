use crate::config::Settings;
use crate::ingest::types::{Bootstrap, Fixture, ManagerProfile, PicksResponse};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// One attempt per request unless FPL_RETRIES raises it; an upstream failure
// is surfaced to the caller rather than masked.
const DEFAULT_ATTEMPTS: u32 = 1;

#[async_trait::async_trait]
pub trait FantasyDataClient: Send + Sync {
    async fn bootstrap(&self) -> Result<Bootstrap>;

    async fn manager_profile(&self, manager_id: u32) -> Result<ManagerProfile>;

    async fn picks(&self, manager_id: u32, gameweek: u32) -> Result<PicksResponse>;

    async fn fixtures(&self) -> Result<Vec<Fixture>>;
}

#[derive(Debug, Clone)]
pub struct FplClient {
    http: reqwest::Client,
    base_url: String,
    attempts: u32,
}

impl FplClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings
            .fpl_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("FPL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let attempts = std::env::var("FPL_RETRIES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_ATTEMPTS)
            .max(1);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build fantasy api http client")?;

        Ok(Self {
            http,
            base_url,
            attempts,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.get_json_once(path).await {
                Ok(v) => return Ok(v),
                Err(err) => {
                    if attempt >= self.attempts {
                        return Err(err);
                    }
                    let backoff = Duration::from_secs(1 << (attempt - 1));
                    tracing::warn!(path, attempt, ?backoff, error = %err, "upstream fetch failed; retrying");
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    async fn get_json_once<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .with_context(|| format!("failed to read {path} response"))?;

        if !status.is_success() {
            anyhow::bail!("upstream HTTP {status} from {path}");
        }

        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {path} response"))
    }
}

#[async_trait::async_trait]
impl FantasyDataClient for FplClient {
    async fn bootstrap(&self) -> Result<Bootstrap> {
        self.get_json("bootstrap-static/").await
    }

    async fn manager_profile(&self, manager_id: u32) -> Result<ManagerProfile> {
        self.get_json(&format!("entry/{manager_id}/")).await
    }

    async fn picks(&self, manager_id: u32, gameweek: u32) -> Result<PicksResponse> {
        self.get_json(&format!("entry/{manager_id}/event/{gameweek}/picks/"))
            .await
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>> {
        self.get_json("fixtures/").await
    }
}

/// The gameweek the analysis runs against: the in-progress event if there is
/// one, otherwise the next scheduled one.
pub fn current_gameweek(bootstrap: &Bootstrap) -> Result<u32> {
    if let Some(ev) = bootstrap.events.iter().find(|e| e.is_current) {
        return Ok(ev.id);
    }
    if let Some(ev) = bootstrap.events.iter().find(|e| e.is_next) {
        return Ok(ev.id);
    }
    anyhow::bail!("catalog has no current or upcoming gameweek");
}
