// kDrive operations

use crate::schema::{FieldRule, OperationSpec};

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_drives", "List the kDrives of an account")
            .field(FieldRule::id("account_id", "Account identifier")),
        OperationSpec::new("infomaniak_get_drive", "Get details of a kDrive").field(drive_id()),
        OperationSpec::new("infomaniak_list_drive_users", "List the users of a kDrive")
            .field(drive_id()),
    ]
}

fn drive_id() -> FieldRule {
    FieldRule::id("drive_id", "kDrive identifier")
}
