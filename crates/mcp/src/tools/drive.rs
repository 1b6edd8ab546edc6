// kDrive tools

use super::ToolRegistry;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DrivesArgs {
    pub account_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct DriveArgs {
    pub drive_id: u64,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register("infomaniak_list_drives", |client, args: DrivesArgs| async move {
        client.drives().list(args.account_id).await
    });

    registry.register("infomaniak_get_drive", |client, args: DriveArgs| async move {
        client.drives().get(args.drive_id).await
    });

    registry.register("infomaniak_list_drive_users", |client, args: DriveArgs| async move {
        client.drives().users(args.drive_id).await
    });
}
