use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::layout::{INDENT_UNIT, INDENT_WIDTH};
use crate::options::{DecodeErrorMode, FormatOptions};
use crate::value::write_value;
use statefmt_types::{Block, DecodeError, ResourceAddr, ResourceMode, Value};

/// Everything needed to print one resource instance.
pub struct InstanceBlock<'a> {
    /// Fully qualified instance address shown in the header comment
    pub address: &'a str,
    pub resource: &'a ResourceAddr,
    pub tainted: bool,
    pub schema: &'a Block,
    pub decoded: Result<Value, DecodeError>,
}

/// Append one instance block to `buf`:
///
/// ```text
/// # aws_instance.web[0]: (tainted)
/// resource "aws_instance" "web" {
///     ami = "ami-123"
/// }
/// ```
///
/// Attributes follow the schema's declared order and null attributes are
/// left out. When decoding failed the problem goes to `sink` and the block
/// ends according to [`FormatOptions::on_decode_error`].
pub fn write_instance_block(
    buf: &mut String,
    block: InstanceBlock<'_>,
    options: &FormatOptions,
    sink: &mut dyn DiagnosticSink,
) {
    let taint = if block.tainted { "(tainted)" } else { "" };
    buf.push_str(&format!("# {}: {}\n", block.address, taint));

    let resource = block.resource;
    match &resource.mode {
        ResourceMode::Managed => buf.push_str(&format!(
            "resource {:?} {:?} {{\n",
            resource.type_name, resource.name
        )),
        ResourceMode::Data => buf.push_str(&format!(
            "data {:?} {:?} {{\n",
            resource.type_name, resource.name
        )),
        // Not produced by well-formed states; show the raw address and go on
        ResourceMode::Unknown(_) => {
            buf.push_str(&resource.to_string());
            buf.push('\n');
        }
    }

    let value = match block.decoded {
        Ok(value) => value,
        Err(err) => {
            let message = err.to_string();
            sink.report(Diagnostic {
                address: block.address.to_string(),
                message: message.clone(),
            });
            if options.on_decode_error == DecodeErrorMode::Placeholder {
                buf.push_str(&format!("{}# decode error: {}\n}}\n\n", INDENT_UNIT, message));
            }
            return;
        }
    };

    for attr in &block.schema.attributes {
        let attr_value = value.get_attr(&attr.name);
        if attr_value.is_null() {
            continue;
        }
        buf.push_str(&format!("{}{} = ", INDENT_UNIT, attr.name));
        write_value(buf, attr_value, INDENT_WIDTH);
        buf.push('\n');
    }
    buf.push_str("}\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefmt_types::{AttrType, Attribute};

    fn schema() -> Block {
        Block::new(vec![
            Attribute::new("id", AttrType::String),
            Attribute::new("tags", AttrType::map(AttrType::String)),
            Attribute::new("arn", AttrType::String),
        ])
    }

    fn render(block: InstanceBlock<'_>, options: &FormatOptions) -> (String, Vec<Diagnostic>) {
        let mut buf = String::new();
        let mut diagnostics = Vec::new();
        write_instance_block(&mut buf, block, options, &mut diagnostics);
        (buf, diagnostics)
    }

    #[test]
    fn test_managed_block_skips_nulls_in_schema_order() {
        let resource = ResourceAddr::managed("aws_instance", "web");
        let schema = schema();
        let decoded = Value::object([
            ("arn", Value::string("arn:1")),
            ("tags", Value::Null),
            ("id", Value::string("i-1")),
        ]);
        let (out, diagnostics) = render(
            InstanceBlock {
                address: "aws_instance.web",
                resource: &resource,
                tainted: false,
                schema: &schema,
                decoded: Ok(decoded),
            },
            &FormatOptions::default(),
        );
        assert_eq!(
            out,
            "# aws_instance.web: \nresource \"aws_instance\" \"web\" {\n    id = \"i-1\"\n    arn = \"arn:1\"\n}\n\n"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_data_block_tainted_with_nested_value() {
        let resource = ResourceAddr::data("aws_ami", "ubuntu");
        let schema = schema();
        let decoded = Value::object([("tags", Value::map([("os", Value::string("linux"))]))]);
        let (out, _) = render(
            InstanceBlock {
                address: "data.aws_ami.ubuntu",
                resource: &resource,
                tainted: true,
                schema: &schema,
                decoded: Ok(decoded),
            },
            &FormatOptions::default(),
        );
        assert_eq!(
            out,
            "# data.aws_ami.ubuntu: (tainted)\ndata \"aws_ami\" \"ubuntu\" {\n    tags = {\n        os = \"linux\"\n    }\n}\n\n"
        );
    }

    #[test]
    fn test_unknown_mode_falls_back_to_raw_address() {
        let resource = ResourceAddr::new(ResourceMode::Unknown("ephemeral".into()), "tls_key", "k");
        let schema = Block::default();
        let (out, _) = render(
            InstanceBlock {
                address: "ephemeral.tls_key.k",
                resource: &resource,
                tainted: false,
                schema: &schema,
                decoded: Ok(Value::object::<_, String>([])),
            },
            &FormatOptions::default(),
        );
        assert_eq!(out, "# ephemeral.tls_key.k: \nephemeral.tls_key.k\n}\n\n");
    }

    fn failed_decode() -> Result<Value, DecodeError> {
        Err(DecodeError {
            path: ".id".to_string(),
            message: "string required, got array".to_string(),
        })
    }

    #[test]
    fn test_decode_failure_truncates_block() {
        let resource = ResourceAddr::managed("aws_instance", "web");
        let schema = schema();
        let (out, diagnostics) = render(
            InstanceBlock {
                address: "aws_instance.web",
                resource: &resource,
                tainted: false,
                schema: &schema,
                decoded: failed_decode(),
            },
            &FormatOptions::default(),
        );
        assert_eq!(out, "# aws_instance.web: \nresource \"aws_instance\" \"web\" {\n");
        assert_eq!(
            diagnostics,
            vec![Diagnostic {
                address: "aws_instance.web".to_string(),
                message: ".id: string required, got array".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_failure_placeholder_closes_block() {
        let resource = ResourceAddr::managed("aws_instance", "web");
        let schema = schema();
        let options = FormatOptions {
            on_decode_error: DecodeErrorMode::Placeholder,
        };
        let (out, diagnostics) = render(
            InstanceBlock {
                address: "aws_instance.web",
                resource: &resource,
                tainted: false,
                schema: &schema,
                decoded: failed_decode(),
            },
            &options,
        );
        assert_eq!(
            out,
            "# aws_instance.web: \nresource \"aws_instance\" \"web\" {\n    # decode error: .id: string required, got array\n}\n\n"
        );
        assert_eq!(diagnostics.len(), 1);
    }
}
