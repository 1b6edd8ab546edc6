//! Per-resource API surfaces of the Infomaniak client.

mod accounts;
mod domains;
mod drives;
mod hosting;
mod mail;
mod misc;
mod vps;

pub use accounts::{AccountRole, AccountsApi, Invitation, ProductFilter};
pub use domains::{DnsRecordType, DnsRecordUpdate, DomainsApi, NewDnsRecord};
pub use drives::DrivesApi;
pub use hosting::{HostingApi, NewDatabase};
pub use mail::{AutoReply, AutoReplyState, MailApi, MailboxUpdate, NewMailbox};
pub use misc::MiscApi;
pub use vps::{NewSnapshot, VpsAction, VpsApi};

use serde::Serialize;

/// Optional `account_id` filter accepted by list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AccountFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
}

impl AccountFilter {
    pub fn new(account_id: Option<u64>) -> Self {
        Self { account_id }
    }
}

/// Percent-encode a value used as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'@' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
