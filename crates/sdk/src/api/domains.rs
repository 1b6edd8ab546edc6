//! Domain and DNS zone endpoints.

use super::{segment, AccountFilter};
use crate::client::InfomaniakClient;
use crate::error::InfomaniakResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Domains API: domains and the records of their DNS zones.
pub struct DomainsApi<'a> {
    client: &'a InfomaniakClient,
}

impl<'a> DomainsApi<'a> {
    pub(crate) fn new(client: &'a InfomaniakClient) -> Self {
        Self { client }
    }

    /// List domains, optionally restricted to one account.
    pub async fn list(&self, filter: AccountFilter) -> InfomaniakResult<Value> {
        self.client.http.get_with_query("/1/domain", &filter).await
    }

    /// Get a specific domain.
    pub async fn get(&self, domain: &str) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/domain/{}", segment(domain)))
            .await
    }

    /// List the DNS records of a domain.
    pub async fn list_records(&self, domain: &str) -> InfomaniakResult<Value> {
        self.client.http.get(&records_path(domain)).await
    }

    /// Get a single DNS record.
    pub async fn get_record(&self, domain: &str, record_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&record_path(domain, record_id))
            .await
    }

    /// Create a DNS record.
    pub async fn create_record(&self, domain: &str, record: &NewDnsRecord) -> InfomaniakResult<Value> {
        self.client.http.post(&records_path(domain), record).await
    }

    /// Update a DNS record. Only the fields set in `update` are sent.
    pub async fn update_record(
        &self,
        domain: &str,
        record_id: u64,
        update: &DnsRecordUpdate,
    ) -> InfomaniakResult<Value> {
        self.client
            .http
            .put(&record_path(domain, record_id), update)
            .await
    }

    /// Delete a DNS record.
    pub async fn delete_record(&self, domain: &str, record_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .delete(&record_path(domain, record_id))
            .await
    }

    /// Check propagation of a DNS record.
    pub async fn check_record(&self, domain: &str, record_id: u64) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("{}/check", record_path(domain, record_id)))
            .await
    }

    /// DNSSEC status of a domain.
    pub async fn dnssec(&self, domain: &str) -> InfomaniakResult<Value> {
        self.client
            .http
            .get(&format!("/1/domain/{}/dnssec", segment(domain)))
            .await
    }
}

fn records_path(domain: &str) -> String {
    format!("/1/domain/{}/dns/record", segment(domain))
}

fn record_path(domain: &str, record_id: u64) -> String {
    format!("{}/{}", records_path(domain), record_id)
}

/// DNS record types accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Dname,
    Ds,
    Mx,
    Ns,
    Smimea,
    Srv,
    Sshfp,
    Tlsa,
    Txt,
}

/// Request to create a DNS record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDnsRecord {
    pub source: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// Partial update of a DNS record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsRecordUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
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

    #[test]
    fn test_record_type_wire_names() {
        assert_eq!(serde_json::to_value(DnsRecordType::Aaaa).unwrap(), "AAAA");
        assert_eq!(serde_json::to_value(DnsRecordType::Cname).unwrap(), "CNAME");
        assert_eq!(serde_json::to_value(DnsRecordType::Smimea).unwrap(), "SMIMEA");
        let parsed: DnsRecordType = serde_json::from_value(json!("SSHFP")).unwrap();
        assert_eq!(parsed, DnsRecordType::Sshfp);
    }

    #[tokio::test]
    async fn test_create_record_omits_absent_fields() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/1/domain/example.com/dns/record"))
            .and(body_json(json!({"source": "www", "type": "A", "target": "1.2.3.4"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": 99})))
            .expect(1)
            .mount(&server)
            .await;

        let record = NewDnsRecord {
            source: "www".to_string(),
            record_type: DnsRecordType::A,
            target: "1.2.3.4".to_string(),
            ttl: None,
            priority: None,
        };
        let result = client.domains().create_record("example.com", &record).await.unwrap();
        assert_eq!(result["data"], 99);
    }

    #[tokio::test]
    async fn test_update_record_sends_partial_body() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/1/domain/example.com/dns/record/5"))
            .and(body_json(json!({"ttl": 300})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let update = DnsRecordUpdate {
            ttl: Some(300),
            ..Default::default()
        };
        client
            .domains()
            .update_record("example.com", 5, &update)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_with_account_filter() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/1/domain"))
            .and(query_param("account_id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": []})))
            .expect(1)
            .mount(&server)
            .await;

        client.domains().list(AccountFilter::new(Some(3))).await.unwrap();
    }

    #[tokio::test]
    async fn test_domain_is_path_encoded() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/1/domain/a%2Fb/dnssec"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        client.domains().dnssec("a/b").await.unwrap();
    }
}
