//! Authenticated activity-stream retrieval
//!
//! Besides drag-and-drop, an activity document can be fetched from a
//! bearer-token-protected streams endpoint. The access token travels in an
//! explicit [`Session`] value passed to whichever component makes the
//! call; there is no global authentication handle. How the token was
//! obtained (identity provider, OAuth popup) is the host's concern.
//!
//! A fetched body goes through the same shape validation as a dropped
//! file.

use crate::error::IngestError;
use crate::schema::parse_activity_document;
use crate::types::HeartRateSeries;

/// An authenticated user session holding an opaque bearer token
#[derive(Debug, Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// Transport for fetching raw activity-stream JSON
#[allow(async_fn_in_trait)] // single-threaded hosts; no Send bound wanted
pub trait ActivityStreamClient {
    /// Fetch the activity-stream body for the given session. One request,
    /// no retries.
    async fn fetch_streams(&self, session: &Session) -> Result<String, IngestError>;
}

/// Fetches an activity's heart-rate streams and validates them
pub struct ActivityService<C: ActivityStreamClient> {
    client: C,
}

impl<C: ActivityStreamClient> ActivityService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch the activity streams and validate them into a
    /// [`HeartRateSeries`], exactly as a dropped file would be.
    pub async fn heart_rate_series(
        &self,
        session: &Session,
    ) -> Result<HeartRateSeries, IngestError> {
        let body = self.client.fetch_streams(session).await?;
        parse_activity_document(&body)
    }
}

/// HTTP transport hitting a configured streams endpoint with the
/// session's bearer token
#[cfg(feature = "net")]
pub struct HttpStreamClient {
    http: reqwest::Client,
    streams_url: String,
}

#[cfg(feature = "net")]
impl HttpStreamClient {
    /// `streams_url` should already select the activity and the
    /// `heartrate,time` stream keys.
    pub fn new(streams_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            streams_url: streams_url.into(),
        }
    }
}

#[cfg(feature = "net")]
impl ActivityStreamClient for HttpStreamClient {
    async fn fetch_streams(&self, session: &Session) -> Result<String, IngestError> {
        let response = self
            .http
            .get(&self.streams_url)
            .bearer_auth(session.access_token())
            .send()
            .await
            .map_err(|e| IngestError::FetchFailed(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| IngestError::FetchFailed(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| IngestError::FetchFailed(e.to_string()))
    }
}
