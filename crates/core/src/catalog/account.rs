// Account, profile and product operations

use crate::schema::{FieldRule, OperationSpec};

pub const ACCOUNT_USER_ROLES: &[&str] = &["admin", "normal", "client"];

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new(
            "infomaniak_get_profile",
            "Get the profile of the user owning the API token",
        ),
        OperationSpec::new(
            "infomaniak_list_accounts",
            "List the Infomaniak accounts (organisations) the user belongs to",
        ),
        OperationSpec::new("infomaniak_get_account", "Get details of an account")
            .field(account_id()),
        OperationSpec::new(
            "infomaniak_list_account_products",
            "List all products subscribed by an account",
        )
        .field(account_id()),
        OperationSpec::new("infomaniak_list_account_users", "List the users of an account")
            .field(account_id()),
        OperationSpec::new(
            "infomaniak_invite_account_user",
            "Invite a user to join an account",
        )
        .field(account_id())
        .field(FieldRule::email("email", "Email address of the person to invite"))
        .field(FieldRule::one_of(
            "role",
            ACCOUNT_USER_ROLES,
            "Role granted to the invited user",
        ))
        .field(FieldRule::string("first_name", "First name of the invited user").optional())
        .field(FieldRule::string("last_name", "Last name of the invited user").optional()),
        OperationSpec::new("infomaniak_list_account_teams", "List the teams of an account")
            .field(account_id()),
        OperationSpec::new(
            "infomaniak_list_products",
            "List products visible to the token, optionally filtered",
        )
        .field(
            FieldRule::string("service_name", "Filter by service name (e.g. domain, kdrive)")
                .optional(),
        )
        .field(FieldRule::string("customer_name", "Filter by customer-facing product name").optional()),
    ]
}

fn account_id() -> FieldRule {
    FieldRule::id("account_id", "Account identifier")
}
