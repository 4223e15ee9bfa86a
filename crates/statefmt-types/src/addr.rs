use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a resource is managed by its provider or only read from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceMode {
    Managed,
    Data,
    /// A mode string this crate does not recognize, kept verbatim
    Unknown(String),
}

impl ResourceMode {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceMode::Managed => "managed",
            ResourceMode::Data => "data",
            ResourceMode::Unknown(raw) => raw,
        }
    }
}

impl From<String> for ResourceMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "managed" => ResourceMode::Managed,
            "data" => ResourceMode::Data,
            _ => ResourceMode::Unknown(s),
        }
    }
}

impl From<ResourceMode> for String {
    fn from(mode: ResourceMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ResourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module-relative resource identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceAddr {
    pub mode: ResourceMode,
    pub type_name: String,
    pub name: String,
}

impl ResourceAddr {
    pub fn new(mode: ResourceMode, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode,
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    pub fn managed(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ResourceMode::Managed, type_name, name)
    }

    pub fn data(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ResourceMode::Data, type_name, name)
    }
}

impl fmt::Display for ResourceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            ResourceMode::Managed => write!(f, "{}.{}", self.type_name, self.name),
            ResourceMode::Data => write!(f, "data.{}.{}", self.type_name, self.name),
            ResourceMode::Unknown(mode) => write!(f, "{}.{}.{}", mode, self.type_name, self.name),
        }
    }
}

/// Distinguishes the instances of a resource using `count` or `for_each`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InstanceKey {
    /// Single-instance resource
    #[default]
    None,
    Int(i64),
    Str(String),
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceKey::None => Ok(()),
            InstanceKey::Int(i) => write!(f, "[{}]", i),
            // JSON string escaping matches the quoting of the config language
            InstanceKey::Str(s) => write!(
                f,
                "[{}]",
                serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
            ),
        }
    }
}

/// Path of nested module calls; empty for the root module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ModuleAddr(Vec<String>);

impl ModuleAddr {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(steps.into_iter().map(Into::into).collect())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Address of the module called `name` from this one
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut steps = self.0.clone();
        steps.push(name.into());
        Self(steps)
    }
}

impl fmt::Display for ModuleAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "module.{}", step)?;
        }
        Ok(())
    }
}

/// Fully qualified address of one resource instance, e.g.
/// `module.net.aws_subnet.private["a"]`.
pub fn instance_addr(module: &ModuleAddr, resource: &ResourceAddr, key: &InstanceKey) -> String {
    if module.is_root() {
        format!("{}{}", resource, key)
    } else {
        format!("{}.{}{}", module, resource, key)
    }
}
