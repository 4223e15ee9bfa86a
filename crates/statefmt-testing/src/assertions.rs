//! Structural assertions on rendered state text.
//!
//! Provides checks that read better than raw string matching:
//! - Block balance (every opened block is closed)
//! - Header order and taint markers

use anyhow::Result;

/// Headers (`# addr: ...`) in the order they appear.
pub fn block_headers(text: &str) -> Vec<&str> {
    text.lines().filter(|line| line.starts_with("# ")).collect()
}

/// Assert that every resource block header is followed by a closing line
/// before the next header.
pub fn assert_balanced_blocks(text: &str) -> Result<()> {
    let mut open: Option<&str> = None;

    for line in text.lines() {
        if line.starts_with("# ") {
            if let Some(header) = open {
                anyhow::bail!("Block {:?} is not closed before the next header", header);
            }
            open = Some(line);
        } else if line == "}" {
            open = None;
        }
    }

    if let Some(header) = open {
        anyhow::bail!("Block {:?} is not closed at end of text", header);
    }

    Ok(())
}

/// Assert that the block headers appear in exactly this order, comparing
/// addresses only.
pub fn assert_header_order(text: &str, expected: &[&str]) -> Result<()> {
    let addresses: Vec<&str> = block_headers(text)
        .iter()
        .filter_map(|header| header.strip_prefix("# "))
        .filter_map(|rest| rest.split_once(':').map(|(addr, _)| addr))
        .collect();

    if addresses != expected {
        anyhow::bail!("Expected headers {:?}, got {:?}", expected, addresses);
    }

    Ok(())
}

/// Addresses whose header carries the `(tainted)` marker.
pub fn tainted_addresses(text: &str) -> Vec<&str> {
    block_headers(text)
        .into_iter()
        .filter_map(|header| header.strip_suffix(": (tainted)"))
        .filter_map(|header| header.strip_prefix("# "))
        .collect()
}
