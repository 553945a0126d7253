//! Line breaking classes, both the ones assigned by Unicode and the ones the
//! compiler invents to carry left context through the pair table.

use std::fmt;

/// A [Line Breaking Class], or a compiler state standing in for one.
///
/// The first group mirrors [Table 1] of UAX #14, except that `OP` is split
/// by East Asian Width into [`Class::OpenPunct`] and
/// [`Class::OpenPunctEastAsian`], and `CP` gets a wide sibling
/// [`Class::ClosePunctEastAsian`]. LB30 only applies to the narrow forms.
///
/// The second group are synthetic: they never come out of the data files.
/// Each one is "a real class plus pending left context", produced as a
/// transition by the rule table and consumed as the left operand of the
/// next lookup.
///
/// [Line Breaking Class]: https://www.unicode.org/reports/tr14/#Table1
/// [Table 1]: https://www.unicode.org/reports/tr14/#Table1
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Class {
    // Non-tailorable Line Breaking Classes
    BK,  // Mandatory Break
    CR,  // Carriage Return
    LF,  // Line Feed
    CM,  // Combining Mark
    NL,  // Next Line
    SG,  // Surrogate
    WJ,  // Word Joiner
    ZW,  // Zero Width Space
    GL,  // Non-breaking ("Glue")
    SP,  // Space
    ZWJ, // Zero Width Joiner

    // Break Opportunities
    B2, // Break Opportunity Before and After
    BA, // Break After
    BB, // Break Before
    HY, // Hyphen
    CB, // Contingent Break After

    // Characters Prohibiting Certain Breaks
    CL, // Close Punctuation
    CP, // Close Parenthesis
    EX, // Exclamation/Interrogation
    IN, // Inseparable
    NS, // Nonstarter
    QU, // Quotation

    // Numeric Context
    IS, // Infix Numeric Separator
    NU, // Numeric
    PO, // Postfix Numeric
    PR, // Prefix Numeric
    SY, // Symbols Allowing Break After

    // Other Characters
    AI, // Ambiguous (Alphabetic or Ideographic)
    AL, // Alphabetic
    CJ, // Conditional Japanese Starter
    EB, // Emoji Base
    EM, // Emoji Modifier
    H2, // Hangul LV Syllable
    H3, // Hangul LVT Syllable
    HL, // Hebrew Letter
    ID, // Ideographic
    JL, // Hangul L Jamo
    JV, // Hangul V Jamo
    JT, // Hangul T Jamo
    RI, // Regional Indicator
    SA, // Complex Context Dependent (South East Asian)
    XX, // Unknown

    /// `OP` whose East Asian Width is not F, W or H.
    OpenPunct,
    /// `OP` whose East Asian Width is F, W or H. Exempt from LB30.
    OpenPunctEastAsian,
    /// `CP` whose East Asian Width is F, W or H. Exempt from LB30.
    ClosePunctEastAsian,

    /// `B2 SP*`, waiting to see whether another `B2` follows (LB17).
    B2FollowedBySpace,
    /// `(CL | CP) SP*`, waiting to see whether an `NS` follows (LB16).
    ClosePunctFollowedBySpace,
    /// `HL (HY | BA)`; nothing may break after it (LB21a).
    HyphenAfterHebrewLetter,
    /// `(PR | PO) OP`; only kept together if a `NU` follows (LB25).
    OpenPunctAfterPrefix,
    /// `NU (NU | SY | IS)* IS`.
    NumericFollowedByInfix,
    /// `NU (NU | SY | IS)* SY`.
    NumericFollowedBySymbol,
    /// `NU (NU | SY | IS)* CL`.
    NumericFollowedByClose,
    /// `NU (NU | SY | IS)* CP`.
    NumericFollowedByCloseParen,
    /// `OP SP*`; nothing may break after it (LB14).
    OpenPunctFollowedBySpace,
    /// `QU SP*`, waiting to see whether an `OP` follows (LB15).
    QuoteFollowedBySpace,
    /// A complete pair of regional indicators (LB30a).
    RegionalIndicatorPair,
    /// `X ZWJ`; whatever follows stays attached (LB8a).
    ZwjAfterBase,
    /// End of text. Only ever used as the right operand.
    EndOfText,
}

use self::Class::*;

/// Every class that can be assigned to a codepoint, in table order.
pub const BASE_CLASSES: [Class; 45] = [
    BK,
    CR,
    LF,
    CM,
    NL,
    SG,
    WJ,
    ZW,
    GL,
    SP,
    ZWJ,
    B2,
    BA,
    BB,
    HY,
    CB,
    CL,
    CP,
    EX,
    IN,
    NS,
    QU,
    IS,
    NU,
    PO,
    PR,
    SY,
    AI,
    AL,
    CJ,
    EB,
    EM,
    H2,
    H3,
    HL,
    ID,
    JL,
    JV,
    JT,
    RI,
    SA,
    XX,
    OpenPunct,
    OpenPunctEastAsian,
    ClosePunctEastAsian,
];

/// The hand-curated left-context states the rule table needs.
pub const SYNTHETIC_CLASSES: [Class; 13] = [
    B2FollowedBySpace,
    ClosePunctFollowedBySpace,
    HyphenAfterHebrewLetter,
    OpenPunctAfterPrefix,
    NumericFollowedByInfix,
    NumericFollowedBySymbol,
    NumericFollowedByClose,
    NumericFollowedByCloseParen,
    OpenPunctFollowedBySpace,
    QuoteFollowedBySpace,
    RegionalIndicatorPair,
    ZwjAfterBase,
    EndOfText,
];

impl Class {
    /// Parses a class the way it is written in `LineBreak.txt`.
    ///
    /// `OP` is absent: it cannot be mapped without knowing
    /// the codepoint's East Asian Width, see [`Class::open_punct`].
    pub fn from_code(code: &str) -> Option<Class> {
        let class = match code {
            "BK" => BK,
            "CR" => CR,
            "LF" => LF,
            "CM" => CM,
            "NL" => NL,
            "SG" => SG,
            "WJ" => WJ,
            "ZW" => ZW,
            "GL" => GL,
            "SP" => SP,
            "ZWJ" => ZWJ,
            "B2" => B2,
            "BA" => BA,
            "BB" => BB,
            "HY" => HY,
            "CB" => CB,
            "CL" => CL,
            "CP" => CP,
            "EX" => EX,
            "IN" => IN,
            "NS" => NS,
            "QU" => QU,
            "IS" => IS,
            "NU" => NU,
            "PO" => PO,
            "PR" => PR,
            "SY" => SY,
            "AI" => AI,
            "AL" => AL,
            "CJ" => CJ,
            "EB" => EB,
            "EM" => EM,
            "H2" => H2,
            "H3" => H3,
            "HL" => HL,
            "ID" => ID,
            "JL" => JL,
            "JV" => JV,
            "JT" => JT,
            "RI" => RI,
            "SA" => SA,
            "XX" => XX,
            _ => return None,
        };
        Some(class)
    }

    /// The `OP` refinement for a codepoint that is (or is not) East Asian
    /// wide.
    pub fn open_punct(east_asian: bool) -> Class {
        if east_asian {
            OpenPunctEastAsian
        } else {
            OpenPunct
        }
    }

    /// The `CP` refinement for a codepoint that is (or is not) East Asian
    /// wide.
    pub fn close_paren(east_asian: bool) -> Class {
        if east_asian {
            ClosePunctEastAsian
        } else {
            CP
        }
    }

    /// The identifier used for this class in generated tables.
    pub fn name(self) -> &'static str {
        match self {
            BK => "BK",
            CR => "CR",
            LF => "LF",
            CM => "CM",
            NL => "NL",
            SG => "SG",
            WJ => "WJ",
            ZW => "ZW",
            GL => "GL",
            SP => "SP",
            ZWJ => "ZWJ",
            B2 => "B2",
            BA => "BA",
            BB => "BB",
            HY => "HY",
            CB => "CB",
            CL => "CL",
            CP => "CP",
            EX => "EX",
            IN => "IN",
            NS => "NS",
            QU => "QU",
            IS => "IS",
            NU => "NU",
            PO => "PO",
            PR => "PR",
            SY => "SY",
            AI => "AI",
            AL => "AL",
            CJ => "CJ",
            EB => "EB",
            EM => "EM",
            H2 => "H2",
            H3 => "H3",
            HL => "HL",
            ID => "ID",
            JL => "JL",
            JV => "JV",
            JT => "JT",
            RI => "RI",
            SA => "SA",
            XX => "XX",
            OpenPunct => "OP_OP30",
            OpenPunctEastAsian => "OP_EA",
            ClosePunctEastAsian => "CP_EA",
            B2FollowedBySpace => "B2_SP",
            ClosePunctFollowedBySpace => "CL_CP_SP",
            HyphenAfterHebrewLetter => "HL_HY",
            OpenPunctAfterPrefix => "LB25_OP",
            NumericFollowedByInfix => "LB25_NU_IS",
            NumericFollowedBySymbol => "LB25_NU_SY",
            NumericFollowedByClose => "LB25_NU_CL",
            NumericFollowedByCloseParen => "LB25_NU_CP",
            OpenPunctFollowedBySpace => "OP_SP",
            QuoteFollowedBySpace => "QU_SP",
            RegionalIndicatorPair => "RI_RI",
            ZwjAfterBase => "ZWJ_X",
            EndOfText => "EOT",
        }
    }

    pub fn is_synthetic(self) -> bool {
        SYNTHETIC_CLASSES.contains(&self)
    }

    /// Whether reaching LB31 with this class still on the left means a
    /// rule forgot about it.
    ///
    /// Synthetic classes are either decided by their own rule or reduced
    /// back to a real class before LB31. `EndOfText` never appears on the
    /// left in a real lookup, so its row is allowed to fall through.
    pub fn requires_explicit_row(self) -> bool {
        self.is_synthetic() && self != EndOfText
    }

    /// Resolves the classes [LB1] says have no behavior of their own.
    ///
    /// [LB1]: https://www.unicode.org/reports/tr14/#LB1
    pub fn resolve_lb1(self) -> Class {
        match self {
            AI | SA | SG | XX => AL,
            CJ => NS,
            other => other,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
