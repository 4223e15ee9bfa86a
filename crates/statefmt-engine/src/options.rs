/// What to emit for an instance whose attributes fail to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrorMode {
    /// Stop the block right after its opening line. The block is left
    /// without a closing brace, matching long-standing output.
    #[default]
    Truncate,
    /// Write a `# decode error: ...` comment and close the block.
    Placeholder,
}

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub on_decode_error: DecodeErrorMode,
}
