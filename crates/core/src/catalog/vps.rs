// VPS operations

use crate::schema::{FieldRule, OperationSpec};

pub const VPS_ACTIONS: &[&str] = &["start", "stop", "reboot"];

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_vps", "List VPS instances")
            .field(FieldRule::id("account_id", "Restrict to this account").optional()),
        OperationSpec::new("infomaniak_get_vps", "Get details of a VPS").field(vps_id()),
        OperationSpec::new("infomaniak_vps_action", "Start, stop or reboot a VPS")
            .field(vps_id())
            .field(FieldRule::one_of("action", VPS_ACTIONS, "Power action to perform")),
        OperationSpec::new("infomaniak_list_vps_snapshots", "List the snapshots of a VPS")
            .field(vps_id()),
        OperationSpec::new("infomaniak_create_vps_snapshot", "Take a snapshot of a VPS")
            .field(vps_id())
            .field(FieldRule::string("description", "Snapshot description").optional()),
    ]
}

fn vps_id() -> FieldRule {
    FieldRule::id("vps_id", "VPS identifier")
}
