// Mail hosting tools: mailboxes, aliases, redirections and auto-replies

use super::{AccountScope, ToolRegistry};
use infomaniak_sdk::api::{AccountFilter, AutoReply, MailboxUpdate, NewMailbox};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MailHostingArgs {
    pub mail_hosting_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct MailboxArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMailboxArgs {
    pub mail_hosting_id: u64,
    #[serde(flatten)]
    pub mailbox: NewMailbox,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMailboxArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
    #[serde(flatten)]
    pub update: MailboxUpdate,
}

#[derive(Debug, Deserialize)]
pub struct AliasArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
    pub alias: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateRedirectionArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
    pub target_email: String,
}

#[derive(Debug, Deserialize)]
pub struct RedirectionArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
    pub redirection_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct AutoReplyArgs {
    pub mail_hosting_id: u64,
    pub mailbox_name: String,
    #[serde(flatten)]
    pub auto_reply: AutoReply,
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "infomaniak_list_mail_hostings",
        |client, scope: AccountScope| async move {
            client
                .mail()
                .list_hostings(AccountFilter::new(scope.account_id))
                .await
        },
    );

    registry.register(
        "infomaniak_get_mail_hosting",
        |client, args: MailHostingArgs| async move {
            client.mail().get_hosting(args.mail_hosting_id).await
        },
    );

    registry.register(
        "infomaniak_list_mailboxes",
        |client, args: MailHostingArgs| async move {
            client.mail().list_mailboxes(args.mail_hosting_id).await
        },
    );

    registry.register("infomaniak_get_mailbox", |client, args: MailboxArgs| async move {
        client
            .mail()
            .get_mailbox(args.mail_hosting_id, &args.mailbox_name)
            .await
    });

    registry.register(
        "infomaniak_create_mailbox",
        |client, args: CreateMailboxArgs| async move {
            client
                .mail()
                .create_mailbox(args.mail_hosting_id, &args.mailbox)
                .await
        },
    );

    registry.register(
        "infomaniak_update_mailbox",
        |client, args: UpdateMailboxArgs| async move {
            client
                .mail()
                .update_mailbox(args.mail_hosting_id, &args.mailbox_name, &args.update)
                .await
        },
    );

    registry.register("infomaniak_delete_mailbox", |client, args: MailboxArgs| async move {
        client
            .mail()
            .delete_mailbox(args.mail_hosting_id, &args.mailbox_name)
            .await
    });

    registry.register(
        "infomaniak_list_mail_aliases",
        |client, args: MailboxArgs| async move {
            client
                .mail()
                .list_aliases(args.mail_hosting_id, &args.mailbox_name)
                .await
        },
    );

    registry.register("infomaniak_create_mail_alias", |client, args: AliasArgs| async move {
        client
            .mail()
            .create_alias(args.mail_hosting_id, &args.mailbox_name, &args.alias)
            .await
    });

    registry.register("infomaniak_delete_mail_alias", |client, args: AliasArgs| async move {
        client
            .mail()
            .delete_alias(args.mail_hosting_id, &args.mailbox_name, &args.alias)
            .await
    });

    registry.register(
        "infomaniak_list_mail_redirections",
        |client, args: MailboxArgs| async move {
            client
                .mail()
                .list_redirections(args.mail_hosting_id, &args.mailbox_name)
                .await
        },
    );

    registry.register(
        "infomaniak_create_mail_redirection",
        |client, args: CreateRedirectionArgs| async move {
            client
                .mail()
                .create_redirection(args.mail_hosting_id, &args.mailbox_name, &args.target_email)
                .await
        },
    );

    registry.register(
        "infomaniak_delete_mail_redirection",
        |client, args: RedirectionArgs| async move {
            client
                .mail()
                .delete_redirection(args.mail_hosting_id, &args.mailbox_name, args.redirection_id)
                .await
        },
    );

    registry.register("infomaniak_set_auto_reply", |client, args: AutoReplyArgs| async move {
        client
            .mail()
            .set_auto_reply(args.mail_hosting_id, &args.mailbox_name, &args.auto_reply)
            .await
    });
}
