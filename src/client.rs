use reqwest::header;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutsPage};

/// Client for the Hevy workouts listing endpoint.
///
/// Holds the credential and base URL immutably; every call performs exactly
/// one round trip and nothing is cached.
#[derive(Debug, Clone)]
pub struct WorkoutsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WorkoutsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch one page of workouts, newest first.
    ///
    /// The remote service may cap `page_size`; a response shorter than the
    /// requested size is valid and signals that the end of the data is near.
    pub async fn list_page(&self, page: u32, page_size: u32) -> Result<Vec<Workout>> {
        let url = format!("{}/v1/workouts", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("pageSize", page_size)])
            .header(header::ACCEPT, "application/json")
            .header("api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: WorkoutsPage = serde_json::from_str(&body)?;
        tracing::debug!(
            page,
            page_size,
            count = envelope.workouts.len(),
            "fetched workouts page"
        );
        Ok(envelope.workouts)
    }
}
