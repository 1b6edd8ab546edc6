//! Account, profile and product endpoints.

use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accounts API: profile, accounts, their users, teams and products.
pub struct AccountsApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> AccountsApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    /// Profile of the user owning the token.
    pub async fn profile(&self) -> InfomaniakResult<Value> {
        self.client.http.get("/2/profile").await
    }

    /// List accounts the user belongs to.
    pub async fn list(&self) -> InfomaniakResult<Value> {
        self.client.http.get("/1/accounts").await
    }

    /// Get a specific account.
    pub async fn get(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/accounts/{}", account_id))
            .await
    }

    /// List products subscribed by an account.
    pub async fn products(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/accounts/{}/products", account_id))
            .await
    }

    /// List users of an account.
    pub async fn users(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/accounts/{}/users", account_id))
            .await
    }

    /// Invite someone to join an account.
    pub async fn invite(&self, account_id: u64, invitation: &Invitation) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(&format!("/1/accounts/{}/invitations", account_id), invitation)
            .await
    }

    /// List teams of an account.
    pub async fn teams(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/accounts/{}/teams", account_id))
            .await
    }

    /// List invoices of an account.
    pub async fn invoices(&self, account_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/accounts/{}/invoices", account_id))
            .await
    }

    /// List products visible to the token.
    pub async fn list_products(&self, filter: &ProductFilter) -> InfomaniakResult<Value> {
        self.client.http.get_with_query("/1/products", filter).await
    }
}

/// Role granted to an invited account user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Normal,
    Client,
}

/// Request to invite a user to an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub email: String,
    pub role: AccountRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Filters for the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}
