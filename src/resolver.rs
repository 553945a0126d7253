//! Assigning a line breaking class to every codepoint below the ceiling.

use log::debug;

use crate::class::Class;
use crate::class_table::CODEPOINT_LIMIT;
use crate::error::{Error, Result};
use crate::source::{parse_entries, Entry};

/// The [East Asian Width] property.
///
/// [East Asian Width]: https://www.unicode.org/reports/tr11/
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EastAsianWidth {
    A,  // Ambiguous
    F,  // Fullwidth
    H,  // Halfwidth
    N,  // Neutral
    Na, // Narrow
    W,  // Wide
}

impl EastAsianWidth {
    pub fn from_code(code: &str) -> Option<EastAsianWidth> {
        let width = match code {
            "A" => EastAsianWidth::A,
            "F" => EastAsianWidth::F,
            "H" => EastAsianWidth::H,
            "N" => EastAsianWidth::N,
            "Na" => EastAsianWidth::Na,
            "W" => EastAsianWidth::W,
            _ => return None,
        };
        Some(width)
    }

    /// Whether LB30 treats punctuation of this width as East Asian.
    pub fn is_east_asian(self) -> bool {
        match self {
            EastAsianWidth::F | EastAsianWidth::W | EastAsianWidth::H => true,
            _ => false,
        }
    }
}

/// An inclusive run of codepoints sharing one class.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
    pub class: Class,
}

/// East Asian Width for every codepoint below the ceiling. Unlisted
/// codepoints are `N`.
#[derive(Debug, Clone)]
pub struct EastAsianWidthMap {
    widths: Vec<EastAsianWidth>,
}

impl EastAsianWidthMap {
    pub fn from_source(text: &str) -> Result<EastAsianWidthMap> {
        let mut assigned: Vec<Option<EastAsianWidth>> = vec![None; CODEPOINT_LIMIT as usize];
        for entry in parse_entries(text)? {
            let width =
                EastAsianWidth::from_code(&entry.value).ok_or_else(|| unknown_value(&entry))?;
            fill(&mut assigned, &entry, width)?;
        }
        Ok(EastAsianWidthMap {
            widths: assigned
                .into_iter()
                .map(|w| w.unwrap_or(EastAsianWidth::N))
                .collect(),
        })
    }

    pub fn get(&self, codepoint: u32) -> Option<EastAsianWidth> {
        self.widths.get(codepoint as usize).cloned()
    }
}

/// Maps codepoints to their refined line breaking class.
///
/// `OP` and `CP` are split by East Asian Width here, so everything
/// downstream sees [`Class::OpenPunct`], [`Class::OpenPunctEastAsian`],
/// [`Class::CP`] or [`Class::ClosePunctEastAsian`].
#[derive(Debug, Clone)]
pub struct PropertyResolver {
    classes: Vec<Class>,
    widths: EastAsianWidthMap,
}

impl PropertyResolver {
    pub fn new(line_break: &str, east_asian_width: &str) -> Result<PropertyResolver> {
        let widths = EastAsianWidthMap::from_source(east_asian_width)?;

        let mut assigned: Vec<Option<Class>> = vec![None; CODEPOINT_LIMIT as usize];
        let mut refined = 0usize;
        for entry in parse_entries(line_break)? {
            for codepoint in entry.start..=entry.end {
                let wide = widths
                    .get(codepoint)
                    .map_or(false, EastAsianWidth::is_east_asian);
                let class = match entry.value.as_str() {
                    "OP" => Class::open_punct(wide),
                    "CP" => Class::close_paren(wide),
                    code => Class::from_code(code).ok_or_else(|| unknown_value(&entry))?,
                };
                if class == Class::OpenPunctEastAsian || class == Class::ClosePunctEastAsian {
                    refined += 1;
                }
                if assigned[codepoint as usize].is_some() {
                    return Err(Error::Overlap {
                        codepoint,
                        line: entry.line,
                    });
                }
                assigned[codepoint as usize] = Some(class);
            }
        }
        debug!("{} punctuation codepoints refined as East Asian", refined);

        let classes = assigned
            .into_iter()
            .enumerate()
            .map(|(codepoint, class)| class.unwrap_or_else(|| default_class(codepoint as u32)))
            .collect();
        Ok(PropertyResolver { classes, widths })
    }

    /// The class of `codepoint`, or `None` at or beyond the ceiling.
    pub fn resolve(&self, codepoint: u32) -> Option<Class> {
        self.classes.get(codepoint as usize).cloned()
    }

    /// Both properties of `codepoint`, or `None` at or beyond the ceiling.
    pub fn properties(&self, codepoint: u32) -> Option<(Class, EastAsianWidth)> {
        Some((self.resolve(codepoint)?, self.widths.get(codepoint)?))
    }

    /// The whole assignment as maximal runs, in codepoint order.
    pub fn ranges(&self) -> Vec<CodepointRange> {
        let mut out: Vec<CodepointRange> = Vec::new();
        for (codepoint, &class) in self.classes.iter().enumerate() {
            let codepoint = codepoint as u32;
            match out.last_mut() {
                Some(last) if last.class == class => last.end = codepoint,
                _ => out.push(CodepointRange {
                    start: codepoint,
                    end: codepoint,
                    class,
                }),
            }
        }
        out
    }
}

// Codepoints missing from LineBreak.txt. The file header documents these
// defaults for unassigned code points.
fn default_class(codepoint: u32) -> Class {
    match codepoint {
        0x3400..=0x4DBF    // CJK Unified Ideographs Extension A
        | 0x4E00..=0x9FFF  // CJK Unified Ideographs
        | 0xF900..=0xFAFF  // CJK Compatibility Ideographs
        | 0x1F000..=0x1FFFD // Plane 1 range
        => Class::ID,
        0x20A0..=0x20CF // Currency Symbols
        => Class::PR,
        _ => Class::XX,
    }
}

fn fill<T: Copy>(assigned: &mut [Option<T>], entry: &Entry, value: T) -> Result<()> {
    for codepoint in entry.start..=entry.end {
        let slot = &mut assigned[codepoint as usize];
        if slot.is_some() {
            return Err(Error::Overlap {
                codepoint,
                line: entry.line,
            });
        }
        *slot = Some(value);
    }
    Ok(())
}

fn unknown_value(entry: &Entry) -> Error {
    Error::UnknownValue {
        line: entry.line,
        value: entry.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_BREAK: &str = "0028;OP\n0029;CP\n0030..0039;NU\n0041..005A;AL\nFF08;OP\nFF09;CP\n";
    const EAST_ASIAN_WIDTH: &str = "0020..007E;Na\nFF01..FF60;F\n";

    #[test]
    fn splits_punctuation_by_width() {
        let resolver = PropertyResolver::new(LINE_BREAK, EAST_ASIAN_WIDTH).unwrap();
        assert_eq!(resolver.resolve(0x28), Some(Class::OpenPunct));
        assert_eq!(resolver.resolve(0x29), Some(Class::CP));
        assert_eq!(resolver.resolve(0xFF08), Some(Class::OpenPunctEastAsian));
        assert_eq!(resolver.resolve(0xFF09), Some(Class::ClosePunctEastAsian));
        assert_eq!(
            resolver.properties(0xFF08),
            Some((Class::OpenPunctEastAsian, EastAsianWidth::F))
        );
    }

    #[test]
    fn ranges_cover_everything_in_order() {
        let resolver = PropertyResolver::new(LINE_BREAK, EAST_ASIAN_WIDTH).unwrap();
        let ranges = resolver.ranges();
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges.last().unwrap().end, CODEPOINT_LIMIT - 1);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start);
            assert_ne!(pair[0].class, pair[1].class);
        }
    }

    #[test]
    fn defaults() {
        let resolver = PropertyResolver::new("", "").unwrap();
        assert_eq!(resolver.resolve(0x41), Some(Class::XX));
        assert_eq!(resolver.resolve(0x4E00), Some(Class::ID));
        assert_eq!(resolver.resolve(0x20AF), Some(Class::PR));
        assert_eq!(resolver.resolve(0x1FFFF), Some(Class::XX));
        assert_eq!(resolver.resolve(CODEPOINT_LIMIT), None);
        assert_eq!(resolver.properties(0x41).unwrap().1, EastAsianWidth::N);
    }

    #[test]
    fn overlap_is_fatal() {
        match PropertyResolver::new("0041..005A;AL\n0050;NU\n", "") {
            Err(Error::Overlap { codepoint, line }) => {
                assert_eq!(codepoint, 0x50);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
        assert!(PropertyResolver::new("", "0041;Na\n0041;W\n").is_err());
    }

    #[test]
    fn unknown_values_are_fatal() {
        match PropertyResolver::new("0041;QQ\n", "") {
            Err(Error::UnknownValue { value, .. }) => assert_eq!(value, "QQ"),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
        assert!(PropertyResolver::new("", "0041;Z\n").is_err());
    }
}
