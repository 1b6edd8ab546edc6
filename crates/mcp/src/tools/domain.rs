// Domain and DNS zone tools

use super::{AccountScope, ToolRegistry};
use infomaniak_sdk::api::{AccountFilter, DnsRecordUpdate, NewDnsRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DomainArgs {
    pub domain: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordArgs {
    pub domain: String,
    pub record_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordArgs {
    pub domain: String,
    #[serde(flatten)]
    pub record: NewDnsRecord,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecordArgs {
    pub domain: String,
    pub record_id: u64,
    #[serde(flatten)]
    pub update: DnsRecordUpdate,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register("infomaniak_list_domains", |client, scope: AccountScope| async move {
        client
            .domains()
            .list(AccountFilter::new(scope.account_id))
            .await
    });

    registry.register("infomaniak_get_domain", |client, args: DomainArgs| async move {
        client.domains().get(&args.domain).await
    });

    registry.register("infomaniak_list_dns_records", |client, args: DomainArgs| async move {
        client.domains().list_records(&args.domain).await
    });

    registry.register("infomaniak_get_dns_record", |client, args: RecordArgs| async move {
        client
            .domains()
            .get_record(&args.domain, args.record_id)
            .await
    });

    registry.register(
        "infomaniak_create_dns_record",
        |client, args: CreateRecordArgs| async move {
            client
                .domains()
                .create_record(&args.domain, &args.record)
                .await
        },
    );

    registry.register(
        "infomaniak_update_dns_record",
        |client, args: UpdateRecordArgs| async move {
            client
                .domains()
                .update_record(&args.domain, args.record_id, &args.update)
                .await
        },
    );

    registry.register("infomaniak_delete_dns_record", |client, args: RecordArgs| async move {
        client
            .domains()
            .delete_record(&args.domain, args.record_id)
            .await
    });

    registry.register("infomaniak_check_dns_record", |client, args: RecordArgs| async move {
        client
            .domains()
            .check_record(&args.domain, args.record_id)
            .await
    });

    registry.register("infomaniak_get_dnssec", |client, args: DomainArgs| async move {
        client.domains().dnssec(&args.domain).await
    });
}
