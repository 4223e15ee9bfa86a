use crate::{EncodedAttributes, InstanceKey, ModuleAddr, ResourceAddr, Value};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceStatus {
    #[default]
    Ready,
    /// Marked for forced replacement on the next apply
    Tainted,
}

/// Stored object of an instance: status plus still-encoded attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstanceObject {
    pub status: InstanceStatus,
    pub attributes: EncodedAttributes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Instance {
    pub current: InstanceObject,
}

impl Instance {
    pub fn new(status: InstanceStatus, attributes: EncodedAttributes) -> Self {
        Self {
            current: InstanceObject { status, attributes },
        }
    }

    pub fn is_tainted(&self) -> bool {
        self.current.status == InstanceStatus::Tainted
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub addr: ResourceAddr,
    /// Compact provider config string used to find the schema
    pub provider: String,
    pub instances: HashMap<InstanceKey, Instance>,
}

impl Resource {
    pub fn new(addr: ResourceAddr, provider: impl Into<String>) -> Self {
        Self {
            addr,
            provider: provider.into(),
            instances: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputValue {
    pub value: Value,
    pub sensitive: bool,
}

impl OutputValue {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            sensitive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub addr: ModuleAddr,
    /// Keyed by the resource address string (`aws_instance.web`)
    pub resources: HashMap<String, Resource>,
    pub outputs: HashMap<String, OutputValue>,
}

impl Module {
    pub fn new(addr: ModuleAddr) -> Self {
        Self {
            addr,
            ..Default::default()
        }
    }

    /// Insert a resource under its address key, returning any resource it
    /// replaced.
    pub fn insert_resource(&mut self, resource: Resource) -> Option<Resource> {
        self.resources.insert(resource.addr.to_string(), resource)
    }
}

/// Snapshot of every module, ordered by module address.
///
/// The root module keys as the empty string, so it always comes first.
/// `StateTree::default()` holds no modules at all, which is how an empty
/// state file is represented; `StateTree::new()` starts with the root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateTree {
    pub modules: BTreeMap<String, Module>,
}

impl StateTree {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.module_mut(&ModuleAddr::root());
        state
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn root_module(&self) -> Option<&Module> {
        self.modules.get("")
    }

    pub fn module(&self, addr: &ModuleAddr) -> Option<&Module> {
        self.modules.get(&addr.to_string())
    }

    /// Get a module, creating it (and the root) when missing.
    pub fn module_mut(&mut self, addr: &ModuleAddr) -> &mut Module {
        if !addr.is_root() {
            self.modules
                .entry(String::new())
                .or_insert_with(|| Module::new(ModuleAddr::root()));
        }
        self.modules
            .entry(addr.to_string())
            .or_insert_with(|| Module::new(addr.clone()))
    }
}
