//! The UAX #14 rules, evaluated for a single pair of classes.
//!
//! [`resolve`] walks the rules in the order they are numbered in the
//! [annex]. The first rule that matches decides the pair. Some rules only
//! make sense with more than one character of left context; those produce
//! an [`Outcome::Transition`] to a synthetic [`Class`] that remembers the
//! context, and the synthetic class gets its own row of decisions further
//! down.
//!
//! [annex]: https://www.unicode.org/reports/tr14/#Algorithm

use log::trace;

use crate::class::Class;
use crate::class::Class::*;
use crate::error::{Error, Result};

/// What the consumer should do at the boundary between two classes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    /// No break.
    Prohibited,
    /// Break, mandatory or optional.
    Allowed,
    /// The pending left context did not complete, so the boundary where it
    /// started is a break after all.
    Rewind,
    /// Undecided: use the given class as the left operand of the next
    /// lookup.
    Transition(Class),
}

/// The rule that decided a pair.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum Rule {
    LB3,
    LB4,
    LB5,
    LB6,
    LB7,
    LB8,
    LB8a,
    LB9,
    LB11,
    LB12,
    LB12a,
    LB13,
    LB14,
    LB15,
    LB16,
    LB17,
    LB18,
    LB19,
    LB20,
    LB21,
    LB21a,
    LB21b,
    LB22,
    LB23,
    LB23a,
    LB24,
    LB25,
    LB26,
    LB27,
    LB28,
    LB29,
    LB30,
    LB30a,
    LB30b,
    LB31,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Resolution {
    pub outcome: Outcome,
    pub rule: Rule,
}

fn decide(outcome: Outcome, rule: Rule) -> Result<Resolution> {
    Ok(Resolution { outcome, rule })
}

fn keep(rule: Rule) -> Result<Resolution> {
    decide(Outcome::Prohibited, rule)
}

fn split(rule: Rule) -> Result<Resolution> {
    decide(Outcome::Allowed, rule)
}

fn transition(class: Class, rule: Rule) -> Result<Resolution> {
    decide(Outcome::Transition(class), rule)
}

/// Decides the boundary between `left` and `right`.
///
/// Fails only if a synthetic left class falls through every rule without
/// being handled or reduced to a real class.
pub fn resolve(left: Class, right: Class) -> Result<Resolution> {
    let resolution = cascade(left, right)?;
    trace!("{} x {} => {:?}", left, right, resolution);
    Ok(resolution)
}

fn cascade(left: Class, right: Class) -> Result<Resolution> {
    // LB1
    let mut i = left.resolve_lb1();
    let mut j = right.resolve_lb1();

    // LB2 is implicit: the consumer never asks about the start of text.

    // LB3
    if j == EndOfText {
        if i == OpenPunctAfterPrefix {
            return decide(Outcome::Rewind, Rule::LB25);
        }
        return split(Rule::LB3);
    }

    // LB4
    if i == BK {
        return split(Rule::LB4);
    }

    // LB5
    match (i, j) {
        (CR, LF) => return keep(Rule::LB5),
        (CR, _) | (LF, _) | (NL, _) => return split(Rule::LB5),
        _ => {}
    }

    // LB6
    if let BK | CR | LF | NL = j {
        return keep(Rule::LB6);
    }

    // LB7, and the space runs of LB8, LB14, LB15, LB16 and LB17
    if j == SP {
        match i {
            ZW => return transition(ZW, Rule::LB8),
            OpenPunct | OpenPunctEastAsian | OpenPunctFollowedBySpace => {
                return transition(OpenPunctFollowedBySpace, Rule::LB14)
            }
            QU | QuoteFollowedBySpace => return transition(QuoteFollowedBySpace, Rule::LB15),
            CL
            | CP
            | ClosePunctEastAsian
            | ClosePunctFollowedBySpace
            | NumericFollowedByClose
            | NumericFollowedByCloseParen => {
                return transition(ClosePunctFollowedBySpace, Rule::LB16)
            }
            B2 | B2FollowedBySpace => return transition(B2FollowedBySpace, Rule::LB17),
            _ => {}
        }
    }
    if let SP | ZW = j {
        return keep(Rule::LB7);
    }

    // LB8
    if i == ZW {
        return split(Rule::LB8);
    }

    // LB8a
    if let ZWJ | ZwjAfterBase = i {
        return keep(Rule::LB8a);
    }

    // LB9
    match (i, j) {
        (BK, _)
        | (CR, _)
        | (LF, _)
        | (NL, _)
        | (SP, _)
        | (ZW, _)
        | (B2FollowedBySpace, _)
        | (QuoteFollowedBySpace, _)
        | (ClosePunctFollowedBySpace, _) => {}
        (x @ OpenPunctAfterPrefix, ZWJ) | (x, CM) => return transition(x, Rule::LB9),
        (_, ZWJ) => return transition(ZwjAfterBase, Rule::LB9),
        _ => {}
    }

    // LB10
    if i == CM {
        i = AL;
    }
    if let CM | ZWJ = j {
        j = AL;
    }

    // LB11
    if i == WJ || j == WJ {
        return keep(Rule::LB11);
    }

    // LB12
    if i == GL {
        return keep(Rule::LB12);
    }

    // LB12a
    if j == GL {
        return match i {
            SP | BA | HY | B2FollowedBySpace | ClosePunctFollowedBySpace | QuoteFollowedBySpace => {
                split(Rule::LB12a)
            }
            _ => keep(Rule::LB12a),
        };
    }

    // LB13, except where LB25 has to see the numeric context first
    match (i, j) {
        (NU, IS)
        | (NU, SY)
        | (NU, CL)
        | (NU, CP)
        | (NumericFollowedByInfix, IS)
        | (NumericFollowedByInfix, SY)
        | (NumericFollowedByInfix, CL)
        | (NumericFollowedByInfix, CP)
        | (NumericFollowedBySymbol, IS)
        | (NumericFollowedBySymbol, SY)
        | (NumericFollowedBySymbol, CL)
        | (NumericFollowedBySymbol, CP) => {}
        (_, CL) | (_, CP) | (_, ClosePunctEastAsian) | (_, EX) | (_, IS) | (_, SY) => {
            return keep(Rule::LB13)
        }
        _ => {}
    }

    // LB14
    if let OpenPunct | OpenPunctEastAsian | OpenPunctFollowedBySpace = i {
        return keep(Rule::LB14);
    }

    // LB15
    match (i, j) {
        (QU, OpenPunct)
        | (QU, OpenPunctEastAsian)
        | (QuoteFollowedBySpace, OpenPunct)
        | (QuoteFollowedBySpace, OpenPunctEastAsian) => return keep(Rule::LB15),
        (QuoteFollowedBySpace, _) => i = SP,
        _ => {}
    }

    // LB16
    match (i, j) {
        (CL, NS)
        | (CP, NS)
        | (ClosePunctEastAsian, NS)
        | (ClosePunctFollowedBySpace, NS)
        | (NumericFollowedByClose, NS)
        | (NumericFollowedByCloseParen, NS) => return keep(Rule::LB16),
        (ClosePunctFollowedBySpace, _) => i = SP,
        _ => {}
    }

    // LB17
    match (i, j) {
        (B2, B2) | (B2FollowedBySpace, B2) => return keep(Rule::LB17),
        (B2FollowedBySpace, _) => i = SP,
        _ => {}
    }

    // LB18
    if i == SP {
        return split(Rule::LB18);
    }

    // LB19
    if i == QU || j == QU {
        return keep(Rule::LB19);
    }

    // LB20
    if i == CB || j == CB {
        return split(Rule::LB20);
    }

    // LB21
    match (i, j) {
        (HL, HY) | (HL, BA) => return transition(HyphenAfterHebrewLetter, Rule::LB21a),
        (_, BA) | (_, HY) | (_, NS) | (BB, _) => return keep(Rule::LB21),
        _ => {}
    }

    // LB21a
    if i == HyphenAfterHebrewLetter {
        return keep(Rule::LB21a);
    }

    // LB21b
    if let (SY, HL) | (NumericFollowedBySymbol, HL) = (i, j) {
        return keep(Rule::LB21b);
    }

    // LB22
    if j == IN {
        return keep(Rule::LB22);
    }

    // LB23
    match (i, j) {
        (AL, NU) | (HL, NU) | (NU, AL) | (NU, HL) => return keep(Rule::LB23),
        _ => {}
    }

    // LB23a
    match (i, j) {
        (PR, ID) | (PR, EB) | (PR, EM) | (ID, PO) | (EB, PO) | (EM, PO) => {
            return keep(Rule::LB23a)
        }
        _ => {}
    }

    // LB24
    match (i, j) {
        (PR, AL) | (PR, HL) | (PO, AL) | (PO, HL) | (AL, PR) | (AL, PO) | (HL, PR) | (HL, PO) => {
            return keep(Rule::LB24)
        }
        _ => {}
    }

    // LB25: (PR | PO)? OP? NU (NU | SY | IS)* (CL | CP)? (PR | PO)?
    match (i, j) {
        (PR, OpenPunct) | (PR, OpenPunctEastAsian) | (PO, OpenPunct) | (PO, OpenPunctEastAsian) => {
            return transition(OpenPunctAfterPrefix, Rule::LB25)
        }
        (PR, NU) | (PO, NU) | (HY, NU) | (OpenPunctAfterPrefix, NU) => return keep(Rule::LB25),
        (NU, _) | (NumericFollowedByInfix, _) | (NumericFollowedBySymbol, _) => match j {
            NU => return transition(NU, Rule::LB25),
            SY => return transition(NumericFollowedBySymbol, Rule::LB25),
            IS => return transition(NumericFollowedByInfix, Rule::LB25),
            CL => return transition(NumericFollowedByClose, Rule::LB25),
            CP => return transition(NumericFollowedByCloseParen, Rule::LB25),
            PR | PO => return keep(Rule::LB25),
            _ => {}
        },
        (NumericFollowedByClose, PR)
        | (NumericFollowedByClose, PO)
        | (NumericFollowedByCloseParen, PR)
        | (NumericFollowedByCloseParen, PO) => return keep(Rule::LB25),
        _ => {}
    }
    // The numeric run ended here, so the synthetic classes go back to
    // being what they were.
    i = match i {
        OpenPunctAfterPrefix => return decide(Outcome::Rewind, Rule::LB25),
        NumericFollowedByInfix => IS,
        NumericFollowedBySymbol => SY,
        NumericFollowedByClose => CL,
        NumericFollowedByCloseParen => CP,
        other => other,
    };

    // LB26
    match (i, j) {
        (JL, JL) | (JL, JV) | (JL, H2) | (JL, H3) => return keep(Rule::LB26),
        (JV, JV) | (JV, JT) | (H2, JV) | (H2, JT) => return keep(Rule::LB26),
        (JT, JT) | (H3, JT) => return keep(Rule::LB26),
        _ => {}
    }

    // LB27
    match (i, j) {
        (JL, IN) | (JV, IN) | (JT, IN) | (H2, IN) | (H3, IN) => return keep(Rule::LB27),
        (JL, PO) | (JV, PO) | (JT, PO) | (H2, PO) | (H3, PO) => return keep(Rule::LB27),
        (PR, JL) | (PR, JV) | (PR, JT) | (PR, H2) | (PR, H3) => return keep(Rule::LB27),
        _ => {}
    }

    // LB28
    match (i, j) {
        (AL, AL) | (AL, HL) | (HL, AL) | (HL, HL) => return keep(Rule::LB28),
        _ => {}
    }

    // LB29
    match (i, j) {
        (IS, AL) | (IS, HL) => return keep(Rule::LB29),
        _ => {}
    }

    // LB30
    match (i, j) {
        (AL, OpenPunct) | (HL, OpenPunct) | (NU, OpenPunct) => return keep(Rule::LB30),
        (CP, AL) | (CP, HL) | (CP, NU) => return keep(Rule::LB30),
        _ => {}
    }

    // LB30a
    match (i, j) {
        (RI, RI) => return transition(RegionalIndicatorPair, Rule::LB30a),
        (RegionalIndicatorPair, RI) => return split(Rule::LB30a),
        (RegionalIndicatorPair, _) => i = RI,
        _ => {}
    }

    // LB30b
    if let (EB, EM) = (i, j) {
        return keep(Rule::LB30b);
    }

    // LB31
    if i.requires_explicit_row() {
        return Err(Error::IncompleteRow { left, right });
    }
    split(Rule::LB31)
}
