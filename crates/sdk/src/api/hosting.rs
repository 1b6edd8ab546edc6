//! Web hosting endpoints.

use super::AccountFilter;
use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Web hosting API.
pub struct HostingApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> HostingApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: AccountFilter) -> InfomaniakResult<Value> {
        self.client
            .http
            .get_with_query("/1/web_hostings", &filter)
            .await
    }

    pub async fn get(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client.http.get(&hosting_path(hosting_id)).await
    }

    pub async fn sites(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/sites", hosting_path(hosting_id)))
            .await
    }

    pub async fn site(&self, hosting_id: u64, site_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/sites/{}", hosting_path(hosting_id), site_id))
            .await
    }

    pub async fn databases(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/databases", hosting_path(hosting_id)))
            .await
    }

    pub async fn create_database(
        &self,
        hosting_id: u64,
        database: &NewDatabase,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(&format!("{}/databases", hosting_path(hosting_id)), database)
            .await
    }

    pub async fn delete_database(&self, hosting_id: u64, database_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .delete(&format!(
                "{}/databases/{}",
                hosting_path(hosting_id),
                database_id
            ))
            .await
    }

    pub async fn ftp_users(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/ftp/users", hosting_path(hosting_id)))
            .await
    }

    pub async fn ssl_certificates(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/ssl", hosting_path(hosting_id)))
            .await
    }

    pub async fn cron_jobs(&self, hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/crons", hosting_path(hosting_id)))
            .await
    }
}

fn hosting_path(hosting_id: u64) -> String {
    format!("/1/web_hostings/{}", hosting_id)
}

/// Request to create a database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDatabase {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_database() {
        let server = MockServer::start().await;
        let client = InfomaniakClient::builder()
            .base_url(server.uri())
            .api_token("tok")
            .build()
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/1/web_hostings/8/databases"))
            .and(body_json(json!({"name": "shop"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": {"id": 3}})))
            .expect(1)
            .mount(&server)
            .await;

        let database = NewDatabase {
            name: "shop".to_string(),
            comment: None,
        };
        let result = client.hosting().create_database(8, &database).await.unwrap();
        assert_eq!(result["data"]["id"], 3);
    }
}
