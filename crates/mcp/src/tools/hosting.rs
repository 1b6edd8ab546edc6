// Web hosting tools

use super::{AccountScope, ToolRegistry};
use infomaniak_sdk::api::{AccountFilter, NewDatabase};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HostingArgs {
    pub hosting_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct SiteArgs {
    pub hosting_id: u64,
    pub site_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateDatabaseArgs {
    pub hosting_id: u64,
    #[serde(flatten)]
    pub database: NewDatabase,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseArgs {
    pub hosting_id: u64,
    pub database_id: u64,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register("infomaniak_list_hostings", |client, scope: AccountScope| async move {
        client
            .hosting()
            .list(AccountFilter::new(scope.account_id))
            .await
    });

    registry.register("infomaniak_get_hosting", |client, args: HostingArgs| async move {
        client.hosting().get(args.hosting_id).await
    });

    registry.register("infomaniak_list_sites", |client, args: HostingArgs| async move {
        client.hosting().sites(args.hosting_id).await
    });

    registry.register("infomaniak_get_site", |client, args: SiteArgs| async move {
        client.hosting().site(args.hosting_id, args.site_id).await
    });

    registry.register("infomaniak_list_databases", |client, args: HostingArgs| async move {
        client.hosting().databases(args.hosting_id).await
    });

    registry.register(
        "infomaniak_create_database",
        |client, args: CreateDatabaseArgs| async move {
            client
                .hosting()
                .create_database(args.hosting_id, &args.database)
                .await
        },
    );

    registry.register("infomaniak_delete_database", |client, args: DatabaseArgs| async move {
        client
            .hosting()
            .delete_database(args.hosting_id, args.database_id)
            .await
    });

    registry.register("infomaniak_list_ftp_users", |client, args: HostingArgs| async move {
        client.hosting().ftp_users(args.hosting_id).await
    });

    registry.register(
        "infomaniak_list_ssl_certificates",
        |client, args: HostingArgs| async move { client.hosting().ssl_certificates(args.hosting_id).await },
    );

    registry.register("infomaniak_list_cron_jobs", |client, args: HostingArgs| async move {
        client.hosting().cron_jobs(args.hosting_id).await
    });
}
