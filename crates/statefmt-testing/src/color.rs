use regex::Regex;
use statefmt_engine::{Colorize, MARKUP_CODES};

/// Colorizer that resolves every known markup token to nothing.
pub struct StripMarkup {
    pattern: Regex,
}

impl Default for StripMarkup {
    fn default() -> Self {
        Self::new()
    }
}

impl StripMarkup {
    pub fn new() -> Self {
        let pattern = format!(r"\[(?:{})\]", MARKUP_CODES.join("|"));
        Self {
            pattern: Regex::new(&pattern).expect("markup pattern is valid"),
        }
    }
}

impl Colorize for StripMarkup {
    fn color(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_known_tokens_only() {
        let strip = StripMarkup::new();
        assert_eq!(strip.color("[reset][bold]x[red] = [][reset]"), "x = []");
        assert_eq!(strip.color("[unknown] [0]"), "[unknown] [0]");
    }
}
