//! Reading state snapshots and provider schemas from JSON files.
//!
//! State file layout:
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "path": ["network"],
//!       "resources": [
//!         {
//!           "mode": "managed",
//!           "type": "aws_vpc",
//!           "name": "main",
//!           "provider": "provider.aws",
//!           "instances": [{ "index_key": 0, "status": "tainted", "attributes": {} }]
//!         }
//!       ],
//!       "outputs": { "vpc_id": { "value": "vpc-1", "sensitive": false } }
//!     }
//!   ]
//! }
//! ```
//!
//! The schemas file is the serialized form of [`Schemas`].

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use statefmt_types::{
    EncodedAttributes, Instance, InstanceKey, InstanceStatus, ModuleAddr, OutputValue, Resource,
    ResourceAddr, ResourceMode, Schemas, StateTree, Value,
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StateFile {
    #[serde(default)]
    modules: Vec<ModuleRecord>,
}

#[derive(Debug, Deserialize)]
struct ModuleRecord {
    #[serde(default)]
    path: Vec<String>,
    #[serde(default)]
    resources: Vec<ResourceRecord>,
    #[serde(default)]
    outputs: HashMap<String, OutputRecord>,
}

#[derive(Debug, Deserialize)]
struct ResourceRecord {
    mode: ResourceMode,
    #[serde(rename = "type")]
    type_name: String,
    name: String,
    provider: String,
    #[serde(default)]
    instances: Vec<InstanceRecord>,
}

#[derive(Debug, Deserialize)]
struct InstanceRecord {
    #[serde(default)]
    index_key: Option<IndexKey>,
    #[serde(default)]
    status: Option<StatusRecord>,
    #[serde(default)]
    attributes: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IndexKey {
    Int(i64),
    Str(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StatusRecord {
    Ready,
    Tainted,
}

#[derive(Debug, Deserialize)]
struct OutputRecord {
    value: serde_json::Value,
    #[serde(default)]
    sensitive: bool,
}

pub fn load_state(path: &Path) -> Result<StateTree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    parse_state(&content).with_context(|| format!("Invalid state file {}", path.display()))
}

pub fn load_schemas(path: &Path) -> Result<Schemas> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schemas file {}", path.display()))?;
    parse_schemas(&content).with_context(|| format!("Invalid schemas file {}", path.display()))
}

pub fn parse_schemas(content: &str) -> Result<Schemas> {
    Ok(serde_json::from_str(content)?)
}

/// Build a [`StateTree`] from the JSON state layout.
///
/// A file without modules is the empty state. Modules listed more than once
/// are merged, but a resource or instance address may appear only once.
pub fn parse_state(content: &str) -> Result<StateTree> {
    let file: StateFile = serde_json::from_str(content)?;
    if file.modules.is_empty() {
        return Ok(StateTree::default());
    }

    let mut state = StateTree::new();
    for record in file.modules {
        let addr = ModuleAddr::new(record.path);
        let module = state.module_mut(&addr);

        for resource in record.resources {
            let resource = convert_resource(resource, &addr)?;
            match module.resources.entry(resource.addr.to_string()) {
                Entry::Occupied(entry) => {
                    bail!("duplicate resource {} in {}", entry.key(), display_module(&addr))
                }
                Entry::Vacant(entry) => {
                    entry.insert(resource);
                }
            }
        }

        for (name, output) in record.outputs {
            module.outputs.insert(
                name,
                OutputValue {
                    value: Value::from_json(&output.value),
                    sensitive: output.sensitive,
                },
            );
        }
    }
    Ok(state)
}

fn convert_resource(record: ResourceRecord, module: &ModuleAddr) -> Result<Resource> {
    let addr = ResourceAddr::new(record.mode, record.type_name, record.name);
    let mut resource = Resource::new(addr, record.provider);

    for instance in record.instances {
        let key = match instance.index_key {
            None => InstanceKey::None,
            Some(IndexKey::Int(i)) => InstanceKey::Int(i),
            Some(IndexKey::Str(s)) => InstanceKey::Str(s),
        };
        let status = match instance.status {
            Some(StatusRecord::Tainted) => InstanceStatus::Tainted,
            Some(StatusRecord::Ready) | None => InstanceStatus::Ready,
        };
        let attributes = EncodedAttributes::from_json(&instance.attributes);

        if resource.instances.contains_key(&key) {
            bail!(
                "duplicate instance {} in {}",
                statefmt_types::instance_addr(module, &resource.addr, &key),
                display_module(module)
            );
        }
        resource.instances.insert(key, Instance::new(status, attributes));
    }
    Ok(resource)
}

fn display_module(addr: &ModuleAddr) -> String {
    if addr.is_root() {
        "root module".to_string()
    } else {
        addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefmt_types::SchemaResolver;

    #[test]
    fn test_no_modules_is_empty_state() {
        assert!(parse_state("{}").unwrap().is_empty());
        assert!(parse_state(r#"{"modules": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_modules_resources_and_outputs() {
        let state = parse_state(
            r#"{"modules": [
                {"path": [], "outputs": {"ip": {"value": "10.0.0.1", "sensitive": true}}},
                {"path": ["net"], "resources": [
                    {"mode": "managed", "type": "aws_vpc", "name": "main", "provider": "provider.aws",
                     "instances": [
                        {"index_key": 0, "status": "tainted", "attributes": {"id": "vpc-1"}},
                        {"index_key": "b", "attributes": {"id": "vpc-2"}}
                     ]}
                ]}
            ]}"#,
        )
        .unwrap();

        let root = state.root_module().unwrap();
        assert_eq!(root.outputs["ip"].value, Value::string("10.0.0.1"));
        assert!(root.outputs["ip"].sensitive);

        let net = state.module(&ModuleAddr::new(["net"])).unwrap();
        let vpc = &net.resources["aws_vpc.main"];
        assert_eq!(vpc.provider, "provider.aws");
        assert!(vpc.instances[&InstanceKey::Int(0)].is_tainted());
        assert!(!vpc.instances[&InstanceKey::Str("b".into())].is_tainted());
        assert_eq!(
            vpc.instances[&InstanceKey::Int(0)].current.attributes.as_str(),
            r#"{"id":"vpc-1"}"#
        );
    }

    #[test]
    fn test_data_and_unknown_modes() {
        let state = parse_state(
            r#"{"modules": [{"resources": [
                {"mode": "data", "type": "aws_ami", "name": "u", "provider": "p", "instances": [{}]},
                {"mode": "ephemeral", "type": "tls_key", "name": "k", "provider": "p", "instances": [{}]}
            ]}]}"#,
        )
        .unwrap();

        let root = state.root_module().unwrap();
        assert_eq!(root.resources["data.aws_ami.u"].addr.mode, ResourceMode::Data);
        assert_eq!(
            root.resources["ephemeral.tls_key.k"].addr.mode,
            ResourceMode::Unknown("ephemeral".to_string())
        );
    }

    #[test]
    fn test_duplicate_resource_rejected() {
        let err = parse_state(
            r#"{"modules": [{"resources": [
                {"mode": "managed", "type": "t", "name": "a", "provider": "p"},
                {"mode": "managed", "type": "t", "name": "a", "provider": "p"}
            ]}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate resource t.a in root module");
    }

    #[test]
    fn test_duplicate_instance_rejected() {
        let err = parse_state(
            r#"{"modules": [{"path": ["m"], "resources": [
                {"mode": "managed", "type": "t", "name": "a", "provider": "p",
                 "instances": [{"index_key": 1}, {"index_key": 1}]}
            ]}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate instance module.m.t.a[1] in module.m");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = parse_state(
            r#"{"modules": [{"resources": [
                {"mode": "managed", "type": "t", "name": "a", "provider": "p",
                 "instances": [{"status": "deposed"}]}
            ]}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_schemas() {
        let schemas = parse_schemas(
            r#"{"providers": {"provider.aws": {
                "resource_types": {"aws_vpc": {"attributes": [{"name": "id", "type": "string"}]}}
            }}}"#,
        )
        .unwrap();

        let block = schemas
            .resolve("provider.aws", &ResourceMode::Managed, "aws_vpc")
            .unwrap();
        assert_eq!(block.attributes[0].name, "id");
    }
}
