// Backups, invoices, reference data and the raw API passthrough

use crate::schema::{FieldRule, OperationSpec};

pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_swiss_backups", "List Swiss Backup products")
            .field(FieldRule::id("account_id", "Restrict to this account").optional()),
        OperationSpec::new("infomaniak_list_invoices", "List the invoices of an account")
            .field(FieldRule::id("account_id", "Account identifier")),
        OperationSpec::new(
            "infomaniak_list_events",
            "List ongoing Infomaniak service events and maintenance",
        ),
        OperationSpec::new("infomaniak_list_countries", "List countries known to the API"),
        OperationSpec::new("infomaniak_list_timezones", "List timezones known to the API"),
        OperationSpec::new(
            "infomaniak_api_request",
            "Send an arbitrary request to the Infomaniak API for endpoints without a dedicated tool",
        )
        .field(FieldRule::one_of("method", HTTP_METHODS, "HTTP method"))
        .field(FieldRule::string(
            "path",
            "API path starting with a version, e.g. /1/products",
        ))
        .field(FieldRule::object("body", "JSON request body").optional())
        .field(
            FieldRule::object("query", "Query parameters (string, number or boolean values)")
                .optional(),
        ),
    ]
}
