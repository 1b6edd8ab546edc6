//! Mail hosting endpoints: mailboxes, aliases, redirections and auto-replies.

use super::{segment, AccountFilter};
use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Mail API.
pub struct MailApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> MailApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    /// List mail hosting services.
    pub async fn list_hostings(&self, filter: AccountFilter) -> InfomaniakResult<Value> {
        self.client
            .http
            .get_with_query("/1/mail_hostings", &filter)
            .await
    }

    /// Get a mail hosting service.
    pub async fn get_hosting(&self, mail_hosting_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/mail_hostings/{}", mail_hosting_id))
            .await
    }

    pub async fn list_mailboxes(&self, mail_hosting_id: u64) -> InfomaniakResult<Value> {
        self.client.http.get(&mailboxes_path(mail_hosting_id)).await
    }

    pub async fn get_mailbox(&self, mail_hosting_id: u64, mailbox: &str) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&mailbox_path(mail_hosting_id, mailbox))
            .await
    }

    pub async fn create_mailbox(
        &self,
        mail_hosting_id: u64,
        mailbox: &NewMailbox,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(&mailboxes_path(mail_hosting_id), mailbox)
            .await
    }

    pub async fn update_mailbox(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        update: &MailboxUpdate,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .put(&mailbox_path(mail_hosting_id, mailbox), update)
            .await
    }

    pub async fn delete_mailbox(&self, mail_hosting_id: u64, mailbox: &str) -> InfomaniakResult<Value> {
        self.client
            .http
            .delete(&mailbox_path(mail_hosting_id, mailbox))
            .await
    }

    pub async fn list_aliases(&self, mail_hosting_id: u64, mailbox: &str) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/aliases", mailbox_path(mail_hosting_id, mailbox)))
            .await
    }

    pub async fn create_alias(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        alias: &str,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(
                &format!("{}/aliases", mailbox_path(mail_hosting_id, mailbox)),
                &json!({ "alias": alias }),
            )
            .await
    }

    pub async fn delete_alias(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        alias: &str,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .delete(&format!(
                "{}/aliases/{}",
                mailbox_path(mail_hosting_id, mailbox),
                segment(alias)
            ))
            .await
    }

    pub async fn list_redirections(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/redirections", mailbox_path(mail_hosting_id, mailbox)))
            .await
    }

    /// Redirect incoming mail of `mailbox` to `email`.
    pub async fn create_redirection(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        email: &str,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .post(
                &format!("{}/redirections", mailbox_path(mail_hosting_id, mailbox)),
                &json!({ "email": email }),
            )
            .await
    }

    pub async fn delete_redirection(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        redirection_id: u64,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .delete(&format!(
                "{}/redirections/{}",
                mailbox_path(mail_hosting_id, mailbox),
                redirection_id
            ))
            .await
    }

    pub async fn set_auto_reply(
        &self,
        mail_hosting_id: u64,
        mailbox: &str,
        auto_reply: &AutoReply,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .put(
                &format!("{}/auto_reply", mailbox_path(mail_hosting_id, mailbox)),
                auto_reply,
            )
            .await
    }
}

fn mailboxes_path(mail_hosting_id: u64) -> String {
    format!("/1/mail_hostings/{}/mailboxes", mail_hosting_id)
}

fn mailbox_path(mail_hosting_id: u64, mailbox: &str) -> String {
    format!("{}/{}", mailboxes_path(mail_hosting_id), segment(mailbox))
}

/// Request to create a mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMailbox {
    pub mailbox_name: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial update of a mailbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailboxUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoReplyState {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoReply {
    pub state: AutoReplyState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, InfomaniakClient) {
        let server = MockServer::start().await;
        let client = InfomaniakClient::builder()
            .base_url(server.uri())
            .api_token("tok")
            .build()
            .unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_create_mailbox() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/1/mail_hostings/12/mailboxes"))
            .and(body_json(json!({"mailbox_name": "info", "password": "S3cret!pass"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let mailbox = NewMailbox {
            mailbox_name: "info".to_string(),
            password: "S3cret!pass".to_string(),
            first_name: None,
            last_name: None,
        };
        client.mail().create_mailbox(12, &mailbox).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_alias_path() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/1/mail_hostings/12/mailboxes/info/aliases/contact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.mail().delete_alias(12, "info", "contact").await.unwrap();
        assert_eq!(result["data"], true);
    }

    #[tokio::test]
    async fn test_auto_reply_body() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/1/mail_hostings/12/mailboxes/info/auto_reply"))
            .and(body_json(json!({"state": "enabled", "message": "Back Monday"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = AutoReply {
            state: AutoReplyState::Enabled,
            subject: None,
            message: Some("Back Monday".to_string()),
        };
        client.mail().set_auto_reply(12, "info", &reply).await.unwrap();
    }
}
