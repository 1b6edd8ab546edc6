// Web hosting operations

use crate::schema::{FieldRule, OperationSpec};

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_hostings", "List web hosting services")
            .field(FieldRule::id("account_id", "Restrict to this account").optional()),
        OperationSpec::new("infomaniak_get_hosting", "Get details of a web hosting")
            .field(hosting_id()),
        OperationSpec::new("infomaniak_list_sites", "List the sites of a web hosting")
            .field(hosting_id()),
        OperationSpec::new("infomaniak_get_site", "Get details of a site")
            .field(hosting_id())
            .field(FieldRule::id("site_id", "Site identifier")),
        OperationSpec::new("infomaniak_list_databases", "List the databases of a web hosting")
            .field(hosting_id()),
        OperationSpec::new("infomaniak_create_database", "Create a database on a web hosting")
            .field(hosting_id())
            .field(FieldRule::string("name", "Database name"))
            .field(FieldRule::string("comment", "Free-form comment").optional()),
        OperationSpec::new("infomaniak_delete_database", "Delete a database")
            .field(hosting_id())
            .field(FieldRule::id("database_id", "Database identifier")),
        OperationSpec::new("infomaniak_list_ftp_users", "List the FTP users of a web hosting")
            .field(hosting_id()),
        OperationSpec::new(
            "infomaniak_list_ssl_certificates",
            "List the SSL certificates of a web hosting",
        )
        .field(hosting_id()),
        OperationSpec::new("infomaniak_list_cron_jobs", "List the cron jobs of a web hosting")
            .field(hosting_id()),
    ]
}

fn hosting_id() -> FieldRule {
    FieldRule::id("hosting_id", "Web hosting identifier")
}
