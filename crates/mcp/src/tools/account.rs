// Profile, account and product tools

use super::{NoArgs, ToolRegistry};
use infomaniak_sdk::api::{Invitation, ProductFilter};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AccountArgs {
    pub account_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct InviteArgs {
    pub account_id: u64,
    #[serde(flatten)]
    pub invitation: Invitation,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register("infomaniak_get_profile", |client, _: NoArgs| async move {
        client.accounts().profile().await
    });

    registry.register("infomaniak_list_accounts", |client, _: NoArgs| async move {
        client.accounts().list().await
    });

    registry.register("infomaniak_get_account", |client, args: AccountArgs| async move {
        client.accounts().get(args.account_id).await
    });

    registry.register(
        "infomaniak_list_account_products",
        |client, args: AccountArgs| async move { client.accounts().products(args.account_id).await },
    );

    registry.register(
        "infomaniak_list_account_users",
        |client, args: AccountArgs| async move { client.accounts().users(args.account_id).await },
    );

    registry.register(
        "infomaniak_invite_account_user",
        |client, args: InviteArgs| async move {
            client
                .accounts()
                .invite(args.account_id, &args.invitation)
                .await
        },
    );

    registry.register(
        "infomaniak_list_account_teams",
        |client, args: AccountArgs| async move { client.accounts().teams(args.account_id).await },
    );

    registry.register("infomaniak_list_products", |client, filter: ProductFilter| async move {
        client.accounts().list_products(&filter).await
    });
}
