// Infomaniak tool handlers, one module per API area

pub mod account;
pub mod domain;
pub mod drive;
pub mod hosting;
pub mod mail;
pub mod misc;
pub mod vps;
mod registry;

pub use registry::{ToolError, ToolHandler, ToolRegistry};

use serde::Deserialize;

/// Argument struct of operations that take no input.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NoArgs {}

/// Optional account restriction shared by the listing operations.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AccountScope {
    #[serde(default)]
    pub account_id: Option<u64>,
}

/// Build the handler table for every Infomaniak operation.
pub fn infomaniak() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    account::register(&mut registry);
    domain::register(&mut registry);
    mail::register(&mut registry);
    hosting::register(&mut registry);
    vps::register(&mut registry);
    drive::register(&mut registry);
    misc::register(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use infomaniak_core::SchemaRegistry;

    #[test]
    fn test_every_spec_has_a_handler() {
        let schemas = SchemaRegistry::infomaniak();
        let tools = infomaniak();

        for name in schemas.names() {
            assert!(tools.contains(name), "no handler for {}", name);
        }
        for name in tools.names() {
            assert!(schemas.contains(name), "no spec for {}", name);
        }
        assert_eq!(schemas.len(), tools.len());
    }
}
