// Mail hosting, mailbox, alias and redirection operations

use crate::schema::{FieldRule, OperationSpec};

pub const AUTO_REPLY_STATES: &[&str] = &["enabled", "disabled"];

pub fn specs() -> Vec<OperationSpec> {
    vec![
        OperationSpec::new("infomaniak_list_mail_hostings", "List mail hosting services")
            .field(FieldRule::id("account_id", "Restrict to this account").optional()),
        OperationSpec::new("infomaniak_get_mail_hosting", "Get details of a mail hosting service")
            .field(mail_hosting_id()),
        OperationSpec::new("infomaniak_list_mailboxes", "List the mailboxes of a mail hosting")
            .field(mail_hosting_id()),
        OperationSpec::new("infomaniak_get_mailbox", "Get details of a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name()),
        OperationSpec::new("infomaniak_create_mailbox", "Create a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(FieldRule::string("password", "Initial password"))
            .field(FieldRule::string("first_name", "Owner first name").optional())
            .field(FieldRule::string("last_name", "Owner last name").optional()),
        OperationSpec::new("infomaniak_update_mailbox", "Update a mailbox password or owner")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(FieldRule::string("password", "New password").optional())
            .field(FieldRule::string("first_name", "Owner first name").optional())
            .field(FieldRule::string("last_name", "Owner last name").optional()),
        OperationSpec::new("infomaniak_delete_mailbox", "Delete a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name()),
        OperationSpec::new("infomaniak_list_mail_aliases", "List the aliases of a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name()),
        OperationSpec::new("infomaniak_create_mail_alias", "Add an alias to a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(alias()),
        OperationSpec::new("infomaniak_delete_mail_alias", "Remove an alias from a mailbox")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(alias()),
        OperationSpec::new(
            "infomaniak_list_mail_redirections",
            "List the redirections of a mailbox",
        )
        .field(mail_hosting_id())
        .field(mailbox_name()),
        OperationSpec::new(
            "infomaniak_create_mail_redirection",
            "Redirect incoming mail of a mailbox to another address",
        )
        .field(mail_hosting_id())
        .field(mailbox_name())
        .field(FieldRule::email("target_email", "Address receiving the redirected mail")),
        OperationSpec::new("infomaniak_delete_mail_redirection", "Remove a mailbox redirection")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(FieldRule::id("redirection_id", "Redirection identifier")),
        OperationSpec::new("infomaniak_set_auto_reply", "Enable or disable a mailbox auto-reply")
            .field(mail_hosting_id())
            .field(mailbox_name())
            .field(FieldRule::one_of("state", AUTO_REPLY_STATES, "Auto-reply state"))
            .field(FieldRule::string("subject", "Auto-reply subject").optional())
            .field(FieldRule::string("message", "Auto-reply body").optional()),
    ]
}

fn mail_hosting_id() -> FieldRule {
    FieldRule::id("mail_hosting_id", "Mail hosting identifier")
}

fn mailbox_name() -> FieldRule {
    FieldRule::string("mailbox_name", "Mailbox local part (before the @)")
}

fn alias() -> FieldRule {
    FieldRule::string("alias", "Alias local part (before the @)")
}
