//! Finding line break opportunities in text with the compiled tables.
//!
//! Each character is looked up in the class table, then adjacent classes
//! are fed through the pair table. While lookups keep returning a
//! transition no decision is made, and a rewind puts the break back where
//! the current transition state started.

use std::str::Chars;
use std::vec;

use crate::class::Class;
use crate::rule_table::{RuleTable, KEEP_RULE, PREVIOUS_BREAK_RULE};
use crate::CompiledTables;

/// Used to specify whether a break is allowed or not.
///
/// `Mandatory` is where it is expected to be a line break, `Opportunity` is
/// where it is allowed to be a line break and `Prohibited` is where a line
/// break isn't allowed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Break {
    Mandatory,
    Opportunity,
    Prohibited,
}

/// The class of a codepoint the compiled tables do not cover.
fn class_beyond_limit(codepoint: u32) -> Class {
    match codepoint {
        0x20000..=0x2FFFD | 0x30000..=0x3FFFD => Class::ID,
        0xE0001 | 0xE0020..=0xE007F | 0xE0100..=0xE01EF => Class::CM,
        _ => Class::XX,
    }
}

impl CompiledTables {
    /// The class of `c`, falling back to a fixed policy above the ceiling.
    pub fn class_of(&self, c: char) -> Class {
        self.classes()
            .lookup(c as u32)
            .unwrap_or_else(|| class_beyond_limit(c as u32))
    }

    fn index_of(&self, class: Class) -> u8 {
        self.alphabet()
            .index_of(class)
            .expect("compiled alphabet covers every base class")
    }
}

/// An `Iterator` that provides information about possible line breaks in a
/// `str`, driven entirely by the compiled tables.
///
/// As it checks the position after every `char`, it will not give
/// information about the position before the very first `char`. Luckily that
/// case is trivial as a line break is never allowed there.
pub struct BreakInfo<'a> {
    chars: Chars<'a>,
    breaks: vec::IntoIter<Break>,
}

impl<'a> BreakInfo<'a> {
    pub fn new(tables: &CompiledTables, input: &'a str) -> BreakInfo<'a> {
        let classes: Vec<u8> = input
            .chars()
            .map(|c| tables.index_of(tables.class_of(c)))
            .collect();
        let mut breaks = decide(tables.rules(), &classes, tables.index_of(Class::EndOfText));

        let hard = [Class::BK, Class::CR, Class::LF, Class::NL];
        for (position, c) in input.chars().enumerate() {
            if breaks[position] == Break::Opportunity && hard.contains(&tables.class_of(c)) {
                breaks[position] = Break::Mandatory;
            }
        }
        BreakInfo {
            chars: input.chars(),
            breaks: breaks.into_iter(),
        }
    }
}

/// Provide information as to whether a line break can be appended for each
/// `char` in the input.
impl<'a> Iterator for BreakInfo<'a> {
    type Item = (char, Break);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.chars.next()?, self.breaks.next()?))
    }
}

/// The break decision after each of `classes`.
fn decide(rules: &RuleTable, classes: &[u8], end_of_text: u8) -> Vec<Break> {
    let len = classes.len();
    let mut breaks = vec![Break::Prohibited; len];
    if len == 0 {
        return breaks;
    }

    let mut left = 0;
    while left + 1 < len {
        let value = rules.get(classes[left], classes[left + 1]);
        if value == KEEP_RULE {
            left += 1;
            continue;
        }
        if value < 0 {
            breaks[left] = Break::Opportunity;
            left += 1;
            continue;
        }

        // Withhold decisions while the left side is a transition state.
        // `anchor` is where the current state started, which is where a
        // rewind puts the break.
        let mut state = value as u8;
        let mut anchor = left + 1;
        let mut current = left + 2;
        left = loop {
            if current == len {
                if rules.get(state, end_of_text) == PREVIOUS_BREAK_RULE {
                    breaks[anchor - 1] = Break::Opportunity;
                    break anchor;
                }
                break len;
            }
            let value = rules.get(state, classes[current]);
            if value == KEEP_RULE {
                break current;
            }
            if value == PREVIOUS_BREAK_RULE {
                breaks[anchor - 1] = Break::Opportunity;
                break anchor;
            }
            if value < 0 {
                breaks[current - 1] = Break::Opportunity;
                break current;
            }
            if value as u8 != state {
                state = value as u8;
                anchor = current;
            }
            current += 1;
        };
    }

    // LB3
    breaks[len - 1] = Break::Mandatory;
    breaks
}
