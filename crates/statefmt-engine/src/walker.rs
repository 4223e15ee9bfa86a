use crate::block::{InstanceBlock, write_instance_block};
use crate::color::RESET;
use crate::diagnostics::DiagnosticSink;
use crate::layout::sorted_keys;
use crate::options::FormatOptions;
use crate::{Error, Result};
use statefmt_types::{
    AttributeDecoder, Block, Module, ResourceMode, SchemaResolver, Value, instance_addr,
};
use std::collections::HashMap;

static NO_ATTRIBUTES: Block = Block {
    attributes: Vec::new(),
};

/// Read-only collaborators shared by every module of one formatting call.
pub struct WalkContext<'a> {
    pub schemas: &'a dyn SchemaResolver,
    pub decoder: &'a dyn AttributeDecoder,
    pub options: &'a FormatOptions,
}

/// Append the blocks of every resource instance in `module`, followed by a
/// `[reset]` line.
///
/// Resources are visited in key order. Instances of one resource come in
/// map order; each block carries its own address so their order carries
/// no meaning.
///
/// A resource with instances whose schema cannot be found is a caller error
/// and aborts the whole walk, except for resources of an unrecognized mode,
/// which are printed without attributes. Resources without instances print
/// nothing and need no schema.
pub fn write_module(
    buf: &mut String,
    module: &Module,
    ctx: &WalkContext<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    for key in sorted_keys(module.resources.keys()) {
        let resource = &module.resources[key];
        let addr = &resource.addr;

        // Schemas are only needed to print instances
        if resource.instances.is_empty() {
            continue;
        }

        let schema = ctx
            .schemas
            .resolve(&resource.provider, &addr.mode, &addr.type_name);
        let schema = match (schema, &addr.mode) {
            (Some(schema), _) => Some(schema),
            (None, ResourceMode::Unknown(_)) => None,
            (None, mode) => {
                return Err(Error::SchemaNotFound {
                    provider: resource.provider.clone(),
                    mode: mode.clone(),
                    type_name: addr.type_name.clone(),
                });
            }
        };
        let implied_type = schema.map(Block::implied_type);

        for (instance_key, instance) in &resource.instances {
            let address = instance_addr(&module.addr, addr, instance_key);
            let decoded = match &implied_type {
                Some(ty) => ctx.decoder.decode(&instance.current.attributes, ty),
                None => Ok(Value::Object(HashMap::new())),
            };

            write_instance_block(
                buf,
                InstanceBlock {
                    address: &address,
                    resource: addr,
                    tainted: instance.is_tainted(),
                    schema: schema.unwrap_or(&NO_ATTRIBUTES),
                    decoded,
                },
                ctx.options,
                sink,
            );
        }
    }

    buf.push_str(RESET);
    buf.push('\n');
    Ok(())
}
