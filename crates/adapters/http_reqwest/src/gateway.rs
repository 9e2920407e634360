//! REST implementation of [`LocationGateway`] over reqwest.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use staffdir_app::ports::LocationGateway;
use staffdir_domain::error::StaffDirError;
use staffdir_domain::id::LocationId;
use staffdir_domain::location::Location;
use staffdir_domain::sort::SortSpec;
use staffdir_domain::time::cache_buster;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Gateway speaking the staff-directory REST dialect.
///
/// One request per call, no retry, no backoff. The shared client reuses
/// connections across calls.
pub struct RestLocationGateway {
    client: reqwest::Client,
    api_url: String,
}

impl RestLocationGateway {
    /// Build a gateway from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, StaffDirError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(GatewayError::from)?;

        Ok(Self {
            client,
            api_url: config.api_url(),
        })
    }

    fn record_url(&self, id: LocationId) -> String {
        format!("{}/{id}", self.api_url)
    }

    /// List URL with the optional sort parameter and the cache buster the
    /// server expects on every list request.
    fn list_url(&self, sort: Option<&SortSpec>) -> String {
        match sort {
            Some(spec) => format!(
                "{}?sort={spec}&cacheBuster={}",
                self.api_url,
                cache_buster()
            ),
            None => format!("{}?cacheBuster={}", self.api_url, cache_buster()),
        }
    }
}

impl LocationGateway for RestLocationGateway {
    async fn list(&self, sort: Option<&SortSpec>) -> Result<Vec<Location>, StaffDirError> {
        let url = self.list_url(sort);
        tracing::debug!(%url, "GET location list");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::from)?;
        decode(check(resp).await?).await
    }

    async fn get(&self, id: LocationId) -> Result<Location, StaffDirError> {
        let url = self.record_url(id);
        tracing::debug!(%url, "GET location");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::from)?;
        decode(check(resp).await?).await
    }

    async fn create(&self, location: Location) -> Result<Location, StaffDirError> {
        tracing::debug!(url = %self.api_url, "POST location");
        let resp = self
            .client
            .post(&self.api_url)
            .json(&location)
            .send()
            .await
            .map_err(GatewayError::from)?;
        decode(check(resp).await?).await
    }

    async fn update(&self, id: LocationId, location: Location) -> Result<Location, StaffDirError> {
        let url = self.record_url(id);
        tracing::debug!(%url, "PUT location");
        let resp = self
            .client
            .put(&url)
            .json(&location)
            .send()
            .await
            .map_err(GatewayError::from)?;
        decode(check(resp).await?).await
    }

    async fn partial_update(
        &self,
        id: LocationId,
        location: Location,
    ) -> Result<Location, StaffDirError> {
        let url = self.record_url(id);
        tracing::debug!(%url, "PATCH location");
        let resp = self
            .client
            .patch(&url)
            .json(&location)
            .send()
            .await
            .map_err(GatewayError::from)?;
        decode(check(resp).await?).await
    }

    async fn delete(&self, id: LocationId) -> Result<Location, StaffDirError> {
        let url = self.record_url(id);
        tracing::debug!(%url, "DELETE location");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(GatewayError::from)?;
        let body = check(resp)
            .await?
            .bytes()
            .await
            .map_err(GatewayError::from)?;
        if body.is_empty() {
            return Ok(Location::default());
        }
        serde_json::from_slice(&body).map_err(|err| GatewayError::from(err).into())
    }
}

/// JSON error body returned by the server on non-2xx responses.
///
/// Accepts both the plain `error` shape and problem-detail `title`/`detail`
/// fields; `detail` wins when several are present.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    title: Option<String>,
    detail: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.detail.or(self.error).or(self.title)
    }
}

/// Check the HTTP status and normalize non-success responses into
/// [`StaffDirError::Api`].
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, StaffDirError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let fallback = || {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {status}"), str::to_string)
    };
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.into_message().unwrap_or_else(fallback),
        Err(_) => fallback(),
    };
    Err(StaffDirError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StaffDirError> {
    resp.json()
        .await
        .map_err(|err| GatewayError::from(err).into())
}
