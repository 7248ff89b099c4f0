//! HTTP client for the appointments store REST API

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    DiningTable, RawDiningTable, RawReservation, Reservation, ReservationAction,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the appointments/tables store
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl StoreClient {
    /// Create a new store client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Store base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|k| format!("Bearer {}", k))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Make a POST request without body, discarding the response body
    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.post(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map non-2xx responses onto [`ClientError`]
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::CONFLICT => ClientError::Conflict(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(text)
            }
            _ => ClientError::Server {
                status: status.as_u16(),
                body: text,
            },
        })
    }

    // ========== Tables ==========

    /// GET /tables - ordered table set
    pub async fn list_tables(&self) -> ClientResult<Vec<DiningTable>> {
        let raw: Vec<RawDiningTable> = self.get("tables").await?;
        let tables = DiningTable::from_raw_batch(raw);
        tracing::debug!(count = tables.len(), "Fetched tables");
        Ok(tables)
    }

    // ========== Reservations ==========

    /// GET /reservations?date=YYYY-MM-DD - reservation snapshot for a day
    pub async fn list_reservations(&self, date: NaiveDate) -> ClientResult<Vec<Reservation>> {
        let path = format!("reservations?date={}", date.format("%Y-%m-%d"));
        let raw: Vec<RawReservation> = self.get(&path).await?;
        let reservations = Reservation::from_raw_batch(raw);
        tracing::debug!(%date, count = reservations.len(), "Fetched reservations");
        Ok(reservations)
    }

    /// GET /reservations/{id}
    pub async fn get_reservation(&self, id: i64) -> ClientResult<Reservation> {
        let raw: RawReservation = self.get(&format!("reservations/{}", id)).await?;
        Reservation::try_from(raw).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// POST /reservations/{id}/{seat|leave|no-show}
    pub async fn apply_action(&self, id: i64, action: ReservationAction) -> ClientResult<()> {
        tracing::info!(reservation_id = id, %action, "Forwarding reservation action to store");
        self.post_empty(&format!("reservations/{}/{}", id, action.path_segment()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ClientConfig::new("http://store.local/api/").build().unwrap();
        assert_eq!(client.base_url(), "http://store.local/api");
        assert_eq!(client.url("/tables"), "http://store.local/api/tables");
        assert_eq!(
            client.url("reservations/4/no-show"),
            "http://store.local/api/reservations/4/no-show"
        );
    }

    #[test]
    fn test_auth_header() {
        let client = ClientConfig::new("http://store.local").build().unwrap();
        assert_eq!(client.auth_header(), None);

        let client = ClientConfig::new("http://store.local")
            .with_api_key("secret")
            .build()
            .unwrap();
        assert_eq!(client.auth_header().as_deref(), Some("Bearer secret"));
    }
}
