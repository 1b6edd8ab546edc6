//! VPS endpoints.

use super::AccountFilter;
use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// VPS API.
pub struct VpsApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> VpsApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: AccountFilter) -> InfomaniakResult<Value> {
        self.client.http.get_with_query("/1/vps", &filter).await
    }

    pub async fn get(&self, vps_id: u64) -> InfomaniakResult<Value> {
        self.client.http.get(&format!("/1/vps/{}", vps_id)).await
    }

    /// Trigger a power action on a VPS.
    pub async fn action(&self, vps_id: u64, action: VpsAction) -> InfomaniakResult<Value> {
        self.client
            .http
            .post_empty(&format!("/1/vps/{}/{}", vps_id, action.as_str()))
            .await
    }

    pub async fn snapshots(&self, vps_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/vps/{}/snapshots", vps_id))
            .await
    }

    pub async fn create_snapshot(&self, vps_id: u64, snapshot: &NewSnapshot) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(&format!("/1/vps/{}/snapshots", vps_id), snapshot)
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpsAction {
    Start,
    Stop,
    Reboot,
}

impl VpsAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Reboot => "reboot",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
