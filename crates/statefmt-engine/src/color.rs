/// Markup token that returns the display to its default style.
pub const RESET: &str = "[reset]";

/// Names of every markup token a colorizer is expected to understand,
/// written in text as `[name]`.
pub const MARKUP_CODES: &[&str] = &[
    "reset", "bold", "dim", "red", "green", "yellow", "blue", "cyan",
];

/// Resolves markup tokens such as `[reset]` or `[bold]` into the target
/// display form. The engine only emits tokens; resolving them is up to the
/// caller.
pub trait Colorize {
    fn color(&self, text: &str) -> String;
}

impl<F> Colorize for F
where
    F: Fn(&str) -> String,
{
    fn color(&self, text: &str) -> String {
        self(text)
    }
}
