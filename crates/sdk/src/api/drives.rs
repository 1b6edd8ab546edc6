//! kDrive endpoints.

use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde_json::Value;

/// kDrive API.
pub struct DrivesApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> DrivesApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    /// List the kDrives of an account.
    pub async fn list(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get_with_query("/2/drive", &[("account_id", account_id)])
            .await
    }

    pub async fn get(&self, drive_id: u64) -> InfomaniakResult<Value> {
        self.client.http.get(&format!("/2/drive/{}", drive_id)).await
    }

    pub async fn users(&self, drive_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/2/drive/{}/users", drive_id))
            .await
    }
}
