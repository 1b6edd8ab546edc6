// Lookup table of operation specs, keyed by operation name

use crate::catalog;
use crate::schema::OperationSpec;
use crate::validate::{validate, ValidatedArgs, ValidationError};
use serde_json::Value;
use std::collections::HashMap;

/// Registry of every operation's input constraints.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    specs: HashMap<&'static str, OperationSpec>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full Infomaniak operation catalog
    pub fn infomaniak() -> Self {
        let mut registry = Self::new();
        for spec in catalog::all() {
            registry.register(spec);
        }
        registry
    }

    /// Register a spec, replacing any previous spec with the same name
    pub fn register(&mut self, spec: OperationSpec) {
        if let Some(previous) = self.specs.insert(spec.name, spec) {
            tracing::warn!(operation = previous.name, "Operation spec registered twice");
        }
    }

    pub fn get(&self, name: &str) -> Option<&OperationSpec> {
        self.specs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// All specs, sorted by name
    pub fn list(&self) -> Vec<&OperationSpec> {
        let mut specs: Vec<&OperationSpec> = self.specs.values().collect();
        specs.sort_by_key(|spec| spec.name);
        specs
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.list().into_iter().map(|spec| spec.name).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Validate `raw` against a registered spec.
    ///
    /// Returns `None` when no spec is registered under `name`.
    pub fn validate(
        &self,
        name: &str,
        raw: Option<&Value>,
    ) -> Option<Result<ValidatedArgs, ValidationError>> {
        self.get(name).map(|spec| validate(spec, raw))
    }
}
