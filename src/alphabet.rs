//! The class alphabet the rule table is indexed by.

use std::collections::HashMap;

use crate::class::{Class, BASE_CLASSES, SYNTHETIC_CLASSES};
use crate::error::{Error, Result};

/// An ordered set of classes, each with a unique index starting at 1.
///
/// Index 0 is reserved so that a zeroed table entry is never mistaken for
/// a valid class.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Alphabet {
    classes: Vec<Class>,
    indices: HashMap<Class, u8>,
}

impl Alphabet {
    /// The full UAX #14 alphabet: every base class, then every synthetic
    /// class.
    pub fn uax14() -> Alphabet {
        let classes: Vec<Class> = BASE_CLASSES
            .iter()
            .chain(SYNTHETIC_CLASSES.iter())
            .cloned()
            .collect();
        Alphabet::new(&classes).expect("built-in alphabet has no duplicates")
    }

    pub fn new(classes: &[Class]) -> Result<Alphabet> {
        if classes.len() > u8::max_value() as usize {
            return Err(Error::AlphabetTooLarge(classes.len()));
        }
        let mut indices = HashMap::with_capacity(classes.len());
        for (i, &class) in classes.iter().enumerate() {
            if indices.insert(class, (i + 1) as u8).is_some() {
                return Err(Error::DuplicateClass(class));
            }
        }
        Ok(Alphabet {
            classes: classes.to_vec(),
            indices,
        })
    }

    /// `PROPERTY_COUNT` in the generated tables.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn index_of(&self, class: Class) -> Option<u8> {
        self.indices.get(&class).cloned()
    }

    pub fn class_at(&self, index: u8) -> Option<Class> {
        if index == 0 {
            return None;
        }
        self.classes.get(index as usize - 1).cloned()
    }

    /// Classes in index order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_start_at_one() {
        let alphabet = Alphabet::uax14();
        assert_eq!(alphabet.len(), BASE_CLASSES.len() + SYNTHETIC_CLASSES.len());
        assert_eq!(alphabet.index_of(Class::BK), Some(1));
        assert_eq!(alphabet.class_at(0), None);
        assert_eq!(alphabet.class_at(1), Some(Class::BK));
        let last = alphabet.len() as u8;
        assert_eq!(alphabet.class_at(last), Some(Class::EndOfText));
        assert_eq!(alphabet.class_at(last + 1), None);
        for &class in alphabet.classes() {
            let index = alphabet.index_of(class).unwrap();
            assert_eq!(alphabet.class_at(index), Some(class));
        }
    }

    #[test]
    fn duplicates_are_rejected() {
        match Alphabet::new(&[Class::AL, Class::NU, Class::AL]) {
            Err(Error::DuplicateClass(class)) => assert_eq!(class, Class::AL),
            other => panic!("unexpected {:?}", other),
        }
    }
}
