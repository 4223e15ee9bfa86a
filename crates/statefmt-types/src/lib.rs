pub mod addr;
pub mod decode;
pub mod error;
pub mod schema;
pub mod state;
pub mod value;

pub use addr::{InstanceKey, ModuleAddr, ResourceAddr, ResourceMode, instance_addr};
pub use decode::{AttributeDecoder, DecodeError, EncodedAttributes, JsonDecoder};
pub use error::{Error, Result};
pub use schema::{Attribute, Block, ProviderSchema, SchemaResolver, Schemas};
pub use state::{Instance, InstanceObject, InstanceStatus, Module, OutputValue, Resource, StateTree};
pub use value::{AttrType, Value};
