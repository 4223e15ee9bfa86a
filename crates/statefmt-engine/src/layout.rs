// Layout primitives shared by the structured and the legacy renderers.
//
// Both renderers indent nested blocks by INDENT_UNIT, except the legacy
// named-map form, which has always used LEGACY_MAP_INDENT. The two units
// are kept side by side so the difference stays a visible choice.

/// One level of nesting (4 spaces)
pub const INDENT_UNIT: &str = "    ";

/// Width of INDENT_UNIT, for renderers that track depth in columns
pub const INDENT_WIDTH: usize = INDENT_UNIT.len();

/// Entry indent of the legacy `name = { ... }` form (2 spaces)
pub const LEGACY_MAP_INDENT: &str = "  ";

/// Spaces for a line at the given depth in characters
pub fn pad(width: usize) -> String {
    " ".repeat(width)
}

/// Map keys in lexicographic order.
///
/// Every path that prints a map goes through here; map iteration order is
/// never observable in output.
pub fn sorted_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut keys: Vec<&str> = keys.into_iter().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sorted_keys() {
        let map: HashMap<String, i32> = [("b", 1), ("a", 2), ("B", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(sorted_keys(map.keys()), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(0), "");
        assert_eq!(pad(4), INDENT_UNIT);
    }
}
