use owo_colors::{OwoColorize, Style};
use regex::Regex;
use statefmt_engine::{Colorize, MARKUP_CODES};
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\[({})\]", MARKUP_CODES.join("|"))).unwrap());

/// Resolves `[code]` markup tokens into ANSI styles, or removes them when
/// color is disabled.
///
/// Only the tokens in [`MARKUP_CODES`] are recognized, so bracketed text in
/// attribute values passes through unchanged.
pub struct MarkupColorizer {
    enabled: bool,
}

impl MarkupColorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Colorize for MarkupColorizer {
    fn color(&self, text: &str) -> String {
        if !self.enabled {
            return MARKUP.replace_all(text, "").into_owned();
        }

        let mut out = String::with_capacity(text.len());
        let mut style = None;
        let mut last = 0;
        for caps in MARKUP.captures_iter(text) {
            let Some(token) = caps.get(0) else { continue };
            push_styled(&mut out, &text[last..token.start()], style);
            style = apply(style, &caps[1]);
            last = token.end();
        }
        push_styled(&mut out, &text[last..], style);
        out
    }
}

/// `None` stands for the terminal's default style.
fn push_styled(out: &mut String, segment: &str, style: Option<Style>) {
    match style {
        _ if segment.is_empty() => {}
        Some(style) => out.push_str(&segment.style(style).to_string()),
        None => out.push_str(segment),
    }
}

fn apply(style: Option<Style>, code: &str) -> Option<Style> {
    let base = style.unwrap_or_else(Style::new);
    match code {
        "bold" => Some(base.bold()),
        "dim" => Some(base.dimmed()),
        "red" => Some(base.red()),
        "green" => Some(base.green()),
        "yellow" => Some(base.yellow()),
        "blue" => Some(base.blue()),
        "cyan" => Some(base.cyan()),
        _ => None,
    }
}
