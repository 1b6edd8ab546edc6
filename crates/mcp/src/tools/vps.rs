// VPS tools

use super::{AccountScope, ToolRegistry};
use infomaniak_sdk::api::{AccountFilter, NewSnapshot, VpsAction};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VpsArgs {
    pub vps_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct VpsActionArgs {
    pub vps_id: u64,
    pub action: VpsAction,
}

#[derive(Debug, Deserialize)]
pub struct CreateSnapshotArgs {
    pub vps_id: u64,
    #[serde(flatten)]
    pub snapshot: NewSnapshot,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register("infomaniak_list_vps", |client, scope: AccountScope| async move {
        client.vps().list(AccountFilter::new(scope.account_id)).await
    });

    registry.register("infomaniak_get_vps", |client, args: VpsArgs| async move {
        client.vps().get(args.vps_id).await
    });

    registry.register("infomaniak_vps_action", |client, args: VpsActionArgs| async move {
        client.vps().action(args.vps_id, args.action).await
    });

    registry.register("infomaniak_list_vps_snapshots", |client, args: VpsArgs| async move {
        client.vps().snapshots(args.vps_id).await
    });

    registry.register(
        "infomaniak_create_vps_snapshot",
        |client, args: CreateSnapshotArgs| async move {
            client
                .vps()
                .create_snapshot(args.vps_id, &args.snapshot)
                .await
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use infomaniak_core::SchemaRegistry;
    use serde_json::json;

    #[test]
    fn test_action_args() {
        let schemas = SchemaRegistry::infomaniak();
        let args = schemas
            .validate("infomaniak_vps_action", Some(&json!({"vps_id": 8, "action": "reboot"})))
            .unwrap()
            .unwrap();

        let typed: VpsActionArgs = args.into_typed().unwrap();
        assert_eq!(typed.action, VpsAction::Reboot);
    }
}
