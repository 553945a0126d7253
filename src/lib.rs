//! A compiler for the pair table of [UAX #14], also called the `Unicode Line
//! Breaking Algorithm`.
//!
//! The rules of the algorithm are evaluated once, offline, for every pair
//! of line breaking classes. What comes out is a pair of read-only tables:
//!
//! * a [`ClassTable`] mapping each codepoint below [`CODEPOINT_LIMIT`] to a
//!   [`Class`], and
//! * a [`RuleTable`] holding one `i8` per ordered pair of classes: a break
//!   ([`BREAK_RULE`]), no break ([`KEEP_RULE`]), a rewind of the pending
//!   context ([`PREVIOUS_BREAK_RULE`]) or, for positive values, the index
//!   of the class to use as the left operand of the next lookup.
//!
//! Rules that need more than one character of context are handled by the
//! positive values: the synthetic classes in [`SYNTHETIC_CLASSES`] each
//! stand for a real class plus the context seen so far.
//!
//! # Examples
//!
//! ```
//! use uax_14_tables::{compile, Break, BreakInfo, Class, Outcome};
//!
//! let line_break = "0020;SP\n0028;OP\n0029;CP\n0030..0039;NU\n0041..005A;AL\n0061..007A;AL\n";
//! let east_asian_width = "0020..007E;Na\n";
//! let tables = compile(line_break, east_asian_width).unwrap();
//!
//! assert_eq!(tables.class_of('('), Class::OpenPunct);
//! assert_eq!(
//!     tables.rules().outcome(Class::OpenPunct, Class::AL),
//!     Some(Outcome::Prohibited)
//! );
//!
//! let mut split_input = String::new();
//! for (c, br) in BreakInfo::new(&tables, "see (a) 42") {
//!     split_input.push(c);
//!     if br == Break::Mandatory || br == Break::Opportunity {
//!         split_input.push('\n');
//!     }
//! }
//! let lines = split_input.split('\n').collect::<Vec<&str>>();
//! assert_eq!(lines, ["see ", "(a) ", "42", ""]);
//! ```
//!
//! [UAX #14]: https://www.unicode.org/reports/tr14/

mod alphabet;
mod class;
mod class_table;
pub mod emit;
mod error;
mod resolver;
mod rule_table;
mod rules;
mod segment;
pub mod source;

use log::debug;

pub use alphabet::Alphabet;
pub use class::{Class, BASE_CLASSES, SYNTHETIC_CLASSES};
pub use class_table::{Block, ClassTable, BLOCK_COUNT, BLOCK_SIZE, CODEPOINT_LIMIT, DEFAULT_BLOCKS};
pub use error::{Error, Result};
pub use resolver::{CodepointRange, EastAsianWidth, EastAsianWidthMap, PropertyResolver};
pub use rule_table::{RuleTable, BREAK_RULE, KEEP_RULE, PREVIOUS_BREAK_RULE};
pub use rules::{resolve, Outcome, Resolution, Rule};
pub use segment::{Break, BreakInfo};

/// Everything the downstream segmenter needs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CompiledTables {
    classes: ClassTable,
    rules: RuleTable,
}

impl CompiledTables {
    pub fn alphabet(&self) -> &Alphabet {
        self.rules.alphabet()
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

/// Compiles the tables from the text of `LineBreak.txt` and
/// `EastAsianWidth.txt`.
///
/// Nothing is produced unless every stage succeeds.
pub fn compile(line_break: &str, east_asian_width: &str) -> Result<CompiledTables> {
    let resolver = PropertyResolver::new(line_break, east_asian_width)?;
    let ranges = resolver.ranges();
    debug!("{} codepoint ranges", ranges.len());
    let classes = ClassTable::from_ranges(&ranges)?;
    let rules = RuleTable::compile(&Alphabet::uax14())?;
    Ok(CompiledTables { classes, rules })
}
