//! Operation catalog: the input shape of every Infomaniak tool.
//!
//! Each area module exposes `specs()`; [`all`] concatenates them. The catalog
//! is plain data and carries no behaviour.

use crate::schema::OperationSpec;

pub mod account;
pub mod domain;
pub mod drive;
pub mod hosting;
pub mod mail;
pub mod misc;
pub mod vps;

/// Every operation exposed by the server
pub fn all() -> Vec<OperationSpec> {
    let mut specs = Vec::new();
    specs.extend(account::specs());
    specs.extend(domain::specs());
    specs.extend(mail::specs());
    specs.extend(hosting::specs());
    specs.extend(vps::specs());
    specs.extend(drive::specs());
    specs.extend(misc::specs());
    specs
}
