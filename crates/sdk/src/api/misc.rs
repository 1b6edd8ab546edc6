//! Backups, service events and reference data.

use super::AccountFilter;
use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde_json::Value;

/// Endpoints that do not belong to a product family.
pub struct MiscApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> MiscApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    pub async fn swiss_backups(&self, filter: AccountFilter) -> InfomaniakResult<Value> {
        self.client
            .http
            .get_with_query("/1/swiss_backups", &filter)
            .await
    }

    /// Ongoing service events and maintenance.
    pub async fn events(&self) -> InfomaniakResult<Value> {
        self.client.http.get("/2/events").await
    }

    pub async fn countries(&self) -> InfomaniakResult<Value> {
        self.client.http.get("/1/countries").await
    }

    pub async fn timezones(&self) -> InfomaniakResult<Value> {
        self.client.http.get("/1/timezones").await
    }
}
