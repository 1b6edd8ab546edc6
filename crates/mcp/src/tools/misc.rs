// Backups, invoices, reference data and the raw API passthrough

use super::{AccountScope, NoArgs, ToolRegistry};
use infomaniak_sdk::api::AccountFilter;
use infomaniak_sdk::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct InvoicesArgs {
    pub account_id: u64,
}

/// Methods accepted by the raw passthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<ApiMethod> for Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => Method::GET,
            ApiMethod::Post => Method::POST,
            ApiMethod::Put => Method::PUT,
            ApiMethod::Patch => Method::PATCH,
            ApiMethod::Delete => Method::DELETE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiRequestArgs {
    pub method: ApiMethod,
    pub path: String,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub query: Option<Map<String, Value>>,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "infomaniak_list_swiss_backups",
        |client, scope: AccountScope| async move {
            client
                .misc()
                .swiss_backups(AccountFilter::new(scope.account_id))
                .await
        },
    );

    registry.register("infomaniak_list_invoices", |client, args: InvoicesArgs| async move {
        client.accounts().invoices(args.account_id).await
    });

    registry.register("infomaniak_list_events", |client, _: NoArgs| async move {
        client.misc().events().await
    });

    registry.register("infomaniak_list_countries", |client, _: NoArgs| async move {
        client.misc().countries().await
    });

    registry.register("infomaniak_list_timezones", |client, _: NoArgs| async move {
        client.misc().timezones().await
    });

    registry.register("infomaniak_api_request", |client, args: ApiRequestArgs| async move {
        client
            .request(
                args.method.into(),
                &args.path,
                args.body.as_ref(),
                args.query.as_ref(),
            )
            .await
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use infomaniak_core::SchemaRegistry;
    use serde_json::json;

    #[test]
    fn test_api_request_args() {
        let schemas = SchemaRegistry::infomaniak();
        let args = schemas
            .validate(
                "infomaniak_api_request",
                Some(&json!({"method": "GET", "path": "/1/products", "query": {"page": 2}})),
            )
            .unwrap()
            .unwrap();

        let typed: ApiRequestArgs = args.into_typed().unwrap();
        assert_eq!(typed.method, ApiMethod::Get);
        assert_eq!(Method::from(typed.method), Method::GET);
        assert!(typed.body.is_none());
        assert_eq!(typed.query.unwrap()["page"], 2);
    }

    #[test]
    fn test_api_request_rejects_lowercase_method() {
        let schemas = SchemaRegistry::infomaniak();
        let err = schemas
            .validate("infomaniak_api_request", Some(&json!({"method": "get", "path": "/1/x"})))
            .unwrap()
            .unwrap_err();
        assert_eq!(err.field, "method");
    }

    #[test]
    fn test_every_catalog_method_deserializes() {
        for name in infomaniak_core::catalog::misc::HTTP_METHODS {
            let method: ApiMethod = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(Method::from(method).as_str(), *name);
        }
    }
}
