// Domain and DNS zone operations

use crate::schema::{FieldRule, OperationSpec};

pub const DNS_RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "CAA", "CNAME", "DNAME", "DS", "MX", "NS", "SMIMEA", "SRV", "SSHFP", "TLSA",
    "TXT",
];

pub const TTL_MIN: i64 = 60;
pub const TTL_MAX: i64 = 86400;
pub const PRIORITY_MIN: i64 = 0;
pub const PRIORITY_MAX: i64 = 65535;

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_domains", "List domains, optionally for one account")
            .field(FieldRule::id("account_id", "Restrict to this account").optional()),
        OperationSpec::new("infomaniak_get_domain", "Get details of a domain").field(domain()),
        OperationSpec::new("infomaniak_list_dns_records", "List the DNS records of a domain")
            .field(domain()),
        OperationSpec::new("infomaniak_get_dns_record", "Get a single DNS record")
            .field(domain())
            .field(record_id()),
        OperationSpec::new("infomaniak_create_dns_record", "Create a DNS record in a domain zone")
            .field(domain())
            .field(FieldRule::string(
                "source",
                "Record name relative to the zone (e.g. www, @ for the apex)",
            ))
            .field(FieldRule::one_of("type", DNS_RECORD_TYPES, "Record type"))
            .field(FieldRule::string("target", "Record value (IP address, hostname, text...)"))
            .field(ttl())
            .field(priority()),
        OperationSpec::new("infomaniak_update_dns_record", "Update an existing DNS record")
            .field(domain())
            .field(record_id())
            .field(FieldRule::string("source", "New record name").optional())
            .field(FieldRule::one_of("type", DNS_RECORD_TYPES, "New record type").optional())
            .field(FieldRule::string("target", "New record value").optional())
            .field(ttl())
            .field(priority()),
        OperationSpec::new("infomaniak_delete_dns_record", "Delete a DNS record")
            .field(domain())
            .field(record_id()),
        OperationSpec::new(
            "infomaniak_check_dns_record",
            "Check whether a DNS record has propagated",
        )
        .field(domain())
        .field(record_id()),
        OperationSpec::new("infomaniak_get_dnssec", "Get the DNSSEC status of a domain")
            .field(domain()),
    ]
}

fn domain() -> FieldRule {
    FieldRule::string("domain", "Domain name (e.g. example.com)")
}

fn record_id() -> FieldRule {
    FieldRule::id("record_id", "DNS record identifier")
}

fn ttl() -> FieldRule {
    FieldRule::bounded("ttl", TTL_MIN, TTL_MAX, "Time to live in seconds").optional()
}

fn priority() -> FieldRule {
    FieldRule::bounded(
        "priority",
        PRIORITY_MIN,
        PRIORITY_MAX,
        "Priority (MX and SRV records)",
    )
    .optional()
}
