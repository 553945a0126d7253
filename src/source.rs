//! Reading the UCD property files.
//!
//! Both `LineBreak.txt` and `EastAsianWidth.txt` share one format:
//!
//! ```text
//! 0000..0008;CM     # Cc     [9] <control-0000>..<control-0008>
//! 0009;BA           # Cc         <control-0009>
//! ```
//!
//! Newer files pad the fields with spaces, which is accepted too.

use log::debug;
use regex::Regex;

use crate::class_table::CODEPOINT_LIMIT;
use crate::error::{Error, Result};

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// One data line: a property value for an inclusive codepoint range.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry {
    pub start: u32,
    pub end: u32,
    pub value: String,
    /// 1-based line number, for diagnostics.
    pub line: usize,
}

/// Parses every entry below [`CODEPOINT_LIMIT`].
///
/// The files are sorted, so the first entry starting at or past the limit
/// ends the scan. An entry straddling the limit is clipped to it.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>> {
    let re = Regex::new(
        r"^(?P<start>[0-9A-Fa-f]+)(\.\.(?P<end>[0-9A-Fa-f]+))?\s*;\s*(?P<value>[0-9A-Za-z_]+)$",
    )
    .expect("entry pattern is valid");

    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let data = match raw.find('#') {
            Some(comment) => &raw[..comment],
            None => raw,
        }
        .trim();
        if data.is_empty() {
            continue;
        }

        let caps = re.captures(data).ok_or_else(|| Error::Malformed {
            line,
            reason: format!("`{}` is not CODEPOINT(..CODEPOINT);VALUE", data),
        })?;
        let start = parse_codepoint(&caps["start"], line)?;
        let end = match caps.name("end") {
            Some(end) => parse_codepoint(end.as_str(), line)?,
            None => start,
        };
        if start > end {
            return Err(Error::Malformed {
                line,
                reason: format!("range {:04X}..{:04X} is reversed", start, end),
            });
        }
        if start >= CODEPOINT_LIMIT {
            break;
        }

        entries.push(Entry {
            start,
            end: end.min(CODEPOINT_LIMIT - 1),
            value: caps["value"].to_owned(),
            line,
        });
    }
    debug!("parsed {} entries", entries.len());
    Ok(entries)
}

fn parse_codepoint(digits: &str, line: usize) -> Result<u32> {
    match u32::from_str_radix(digits, 16) {
        Ok(n) if n <= MAX_CODEPOINT => Ok(n),
        _ => Err(Error::Malformed {
            line,
            reason: format!("`{}` is not a codepoint", digits),
        }),
    }
}
