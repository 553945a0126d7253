//! The flat pair table and its `i8` encoding.

use log::debug;

use crate::alphabet::Alphabet;
use crate::class::Class;
use crate::error::{Error, Result};
use crate::rules::{resolve, Outcome};

/// A break is allowed (or mandatory) between the pair.
pub const BREAK_RULE: i8 = -128;
/// The pending left context failed; break where it started.
pub const PREVIOUS_BREAK_RULE: i8 = -2;
/// No break between the pair.
pub const KEEP_RULE: i8 = -1;

/// Largest alphabet whose indices all fit in a non-negative `i8`.
const MAX_ALPHABET: usize = i8::max_value() as usize;

impl Outcome {
    /// Reads a table value back. Transitions are stored as the target's
    /// alphabet index, which is always positive.
    pub fn decode(value: i8, alphabet: &Alphabet) -> Option<Outcome> {
        match value {
            BREAK_RULE => Some(Outcome::Allowed),
            KEEP_RULE => Some(Outcome::Prohibited),
            PREVIOUS_BREAK_RULE => Some(Outcome::Rewind),
            index if index > 0 => alphabet.class_at(index as u8).map(Outcome::Transition),
            _ => None,
        }
    }
}

/// `PROPERTY_COUNT²` outcomes; the entry for left index `l` and right index
/// `r` lives at `(l - 1) * PROPERTY_COUNT + (r - 1)`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RuleTable {
    alphabet: Alphabet,
    table: Vec<i8>,
}

impl RuleTable {
    pub fn compile(alphabet: &Alphabet) -> Result<RuleTable> {
        if alphabet.len() > MAX_ALPHABET {
            return Err(Error::AlphabetTooLarge(alphabet.len()));
        }

        let mut table = Vec::with_capacity(alphabet.len() * alphabet.len());
        let mut transitions = 0usize;
        for &left in alphabet.classes() {
            for &right in alphabet.classes() {
                let value = match resolve(left, right)?.outcome {
                    Outcome::Allowed => BREAK_RULE,
                    Outcome::Prohibited => KEEP_RULE,
                    Outcome::Rewind => PREVIOUS_BREAK_RULE,
                    Outcome::Transition(target) => {
                        transitions += 1;
                        let index = alphabet.index_of(target).ok_or(Error::UndeclaredClass {
                            left,
                            right,
                            target,
                        })?;
                        index as i8
                    }
                };
                table.push(value);
            }
        }
        debug!(
            "rule table: {} classes, {} transitions",
            alphabet.len(),
            transitions
        );

        Ok(RuleTable {
            alphabet: alphabet.clone(),
            table,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The raw table value for a pair of alphabet indices.
    ///
    /// Both indices must be in `1..=len`, as returned by
    /// [`Alphabet::index_of`]. Index 0 is never a class and panics.
    #[inline]
    pub fn get(&self, left: u8, right: u8) -> i8 {
        debug_assert!(left > 0 && right > 0, "alphabet indices start at 1");
        let count = self.alphabet.len();
        self.table[(left as usize - 1) * count + (right as usize - 1)]
    }

    /// The decoded outcome for a pair of classes, if both are in the
    /// alphabet.
    pub fn outcome(&self, left: Class, right: Class) -> Option<Outcome> {
        let left = self.alphabet.index_of(left)?;
        let right = self.alphabet.index_of(right)?;
        Outcome::decode(self.get(left, right), &self.alphabet)
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.table
    }
}
