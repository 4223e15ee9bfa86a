use crate::{AttrType, ResourceMode};
use serde::Deserialize;
use std::collections::HashMap;

/// One top-level attribute declared by a resource type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: AttrType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: AttrType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Attribute set of a resource type or data source, in declared order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Block {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// The object type an instance of this block decodes into
    pub fn implied_type(&self) -> AttrType {
        AttrType::Object(
            self.attributes
                .iter()
                .map(|attr| (attr.name.clone(), attr.ty.clone()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resource_types: HashMap<String, Block>,
    #[serde(default)]
    pub data_sources: HashMap<String, Block>,
}

/// Schemas of every provider referenced by a state, keyed by the compact
/// provider config string (`provider.aws`, `provider.aws.west`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schemas {
    #[serde(default)]
    pub providers: HashMap<String, ProviderSchema>,
}

/// Read-only schema lookup handed to the formatter.
pub trait SchemaResolver {
    fn resolve(&self, provider: &str, mode: &ResourceMode, type_name: &str) -> Option<&Block>;
}

impl SchemaResolver for Schemas {
    fn resolve(&self, provider: &str, mode: &ResourceMode, type_name: &str) -> Option<&Block> {
        let provider = self.providers.get(provider)?;
        match mode {
            ResourceMode::Managed => provider.resource_types.get(type_name),
            ResourceMode::Data => provider.data_sources.get(type_name),
            ResourceMode::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMAS: &str = r#"{
        "providers": {
            "provider.aws": {
                "resource_types": {
                    "aws_instance": {
                        "attributes": [
                            {"name": "id", "type": "string"},
                            {"name": "tags", "type": ["map", "string"]}
                        ]
                    }
                },
                "data_sources": {
                    "aws_ami": {"attributes": [{"name": "id", "type": "string"}]}
                }
            }
        }
    }"#;

    #[test]
    fn test_resolve_by_mode() {
        let schemas: Schemas = serde_json::from_str(SCHEMAS).unwrap();

        let block = schemas
            .resolve("provider.aws", &ResourceMode::Managed, "aws_instance")
            .unwrap();
        assert_eq!(block.attributes.len(), 2);
        assert_eq!(block.attributes[1].ty, AttrType::map(AttrType::String));

        assert!(schemas.resolve("provider.aws", &ResourceMode::Data, "aws_ami").is_some());
        assert!(schemas.resolve("provider.aws", &ResourceMode::Data, "aws_instance").is_none());
        assert!(schemas.resolve("provider.gcp", &ResourceMode::Managed, "aws_instance").is_none());
        assert!(
            schemas
                .resolve("provider.aws", &ResourceMode::Unknown("x".into()), "aws_instance")
                .is_none()
        );
    }

    #[test]
    fn test_implied_type_keeps_declared_order() {
        let block = Block::new(vec![
            Attribute::new("zone", AttrType::String),
            Attribute::new("arn", AttrType::String),
        ]);
        assert_eq!(
            block.implied_type(),
            AttrType::Object(vec![
                ("zone".to_string(), AttrType::String),
                ("arn".to_string(), AttrType::String),
            ])
        );
    }
}
