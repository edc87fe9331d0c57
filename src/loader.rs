use crate::error::FetchError;
use crate::model::{RosterResponse, Student};
use crate::sample::choose;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fetches the roster from a remote endpoint. Holds no state besides the
/// HTTP client, so it can be cloned and shared between tasks.
#[derive(Clone, Debug)]
pub struct Loader {
    client: Client,
    endpoint: Url,
}

impl Loader {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Loader whose requests fail with [`FetchError::NetworkFailure`] past
    /// `timeout`.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::NetworkFailure)?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and validate the whole roster.
    pub async fn load(&self) -> Result<Vec<Student>, FetchError> {
        self.fetch().await.inspect_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "cannot load roster");
        })
    }

    /// Fetch the roster and return `count` students picked at random.
    pub async fn sample(&self, count: usize) -> Result<Vec<Student>, FetchError> {
        let students = self.load().await?;
        Ok(choose(&students, count, &mut rand::rng()))
    }

    async fn fetch(&self) -> Result<Vec<Student>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching roster");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::NetworkFailure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }
        let body = response
            .bytes()
            .await
            .map_err(FetchError::NetworkFailure)?;
        let payload: Value = serde_json::from_slice(&body).map_err(FetchError::Malformed)?;
        let students = RosterResponse::validate(&payload)?.into_students();
        debug!(students = students.len(), "roster has been loaded");
        Ok(students)
    }
}
