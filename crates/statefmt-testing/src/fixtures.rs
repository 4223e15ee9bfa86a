//! Fixtures for building states and schemas in tests.
//!
//! Provides fluent builders so a test can describe a state in a few lines:
//!
//! ```
//! use serde_json::json;
//! use statefmt_testing::StateBuilder;
//!
//! let state = StateBuilder::new()
//!     .managed("example_type", "a", json!({"id": "x1"}))
//!     .build();
//! assert_eq!(state.modules.len(), 1);
//! ```

use statefmt_types::{
    AttrType, Attribute, Block, EncodedAttributes, Instance, InstanceKey, InstanceStatus,
    ModuleAddr, OutputValue, Resource, ResourceAddr, Schemas, StateTree, Value,
};

/// Provider config string used when a test does not care which provider
/// a resource belongs to.
pub const DEFAULT_PROVIDER: &str = "provider.example";

/// Fluent builder for [`StateTree`].
pub struct StateBuilder {
    state: StateTree,
    module: ModuleAddr,
    provider: String,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBuilder {
    /// Start with a state holding only the root module.
    pub fn new() -> Self {
        Self {
            state: StateTree::new(),
            module: ModuleAddr::root(),
            provider: DEFAULT_PROVIDER.to_string(),
        }
    }

    /// Add subsequent resources to the module at `path` (created if needed).
    pub fn in_module(mut self, path: &[&str]) -> Self {
        self.module = ModuleAddr::new(path.iter().copied());
        self.state.module_mut(&self.module);
        self
    }

    /// Add subsequent resources to the root module.
    pub fn in_root(self) -> Self {
        self.in_module(&[])
    }

    /// Attribute subsequent resources to another provider.
    pub fn with_provider(mut self, provider: &str) -> Self {
        self.provider = provider.to_string();
        self
    }

    /// Add a single-instance managed resource.
    pub fn managed(self, type_name: &str, name: &str, attrs: serde_json::Value) -> Self {
        self.instance(
            ResourceAddr::managed(type_name, name),
            InstanceKey::None,
            InstanceStatus::Ready,
            attrs,
        )
    }

    /// Add a single-instance managed resource marked as tainted.
    pub fn tainted(self, type_name: &str, name: &str, attrs: serde_json::Value) -> Self {
        self.instance(
            ResourceAddr::managed(type_name, name),
            InstanceKey::None,
            InstanceStatus::Tainted,
            attrs,
        )
    }

    /// Add a single-instance data resource.
    pub fn data(self, type_name: &str, name: &str, attrs: serde_json::Value) -> Self {
        self.instance(
            ResourceAddr::data(type_name, name),
            InstanceKey::None,
            InstanceStatus::Ready,
            attrs,
        )
    }

    /// Add one instance to a resource of the current module, creating the
    /// resource on first use.
    pub fn instance(
        mut self,
        addr: ResourceAddr,
        key: InstanceKey,
        status: InstanceStatus,
        attrs: serde_json::Value,
    ) -> Self {
        let provider = self.provider.clone();
        let module = self.state.module_mut(&self.module);
        let resource = module
            .resources
            .entry(addr.to_string())
            .or_insert_with(|| Resource::new(addr, provider));
        resource
            .instances
            .insert(key, Instance::new(status, EncodedAttributes::from_json(&attrs)));
        self
    }

    /// Add an output value to the root module.
    pub fn output(mut self, name: &str, value: Value) -> Self {
        self.state
            .module_mut(&ModuleAddr::root())
            .outputs
            .insert(name.to_string(), OutputValue::new(value));
        self
    }

    pub fn build(self) -> StateTree {
        self.state
    }
}

/// Fluent builder for [`Schemas`].
#[derive(Default)]
pub struct SchemasBuilder {
    schemas: Schemas,
}

impl SchemasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a managed resource type for `provider`.
    pub fn resource_type(mut self, provider: &str, type_name: &str, attrs: &[(&str, AttrType)]) -> Self {
        self.schemas
            .providers
            .entry(provider.to_string())
            .or_default()
            .resource_types
            .insert(type_name.to_string(), block(attrs));
        self
    }

    /// Declare a data source for `provider`.
    pub fn data_source(mut self, provider: &str, type_name: &str, attrs: &[(&str, AttrType)]) -> Self {
        self.schemas
            .providers
            .entry(provider.to_string())
            .or_default()
            .data_sources
            .insert(type_name.to_string(), block(attrs));
        self
    }

    pub fn build(self) -> Schemas {
        self.schemas
    }
}

fn block(attrs: &[(&str, AttrType)]) -> Block {
    Block::new(
        attrs
            .iter()
            .map(|(name, ty)| Attribute::new(*name, ty.clone()))
            .collect(),
    )
}
