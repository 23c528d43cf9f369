//! Core bidi and shaping types.

use serde::Serialize;

/// Bidi character class (UAX #9 table 4), plus the synthetic [`BidiType::Gap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum BidiType {
    // Strong
    /// Left-to-right strong.
    L,
    /// Right-to-left strong.
    R,
    /// Arabic letter.
    AL,

    // Weak
    /// European number.
    EN,
    /// European number separator.
    ES,
    /// European number terminator.
    ET,
    /// Arabic number.
    AN,
    /// Common number separator.
    CS,
    /// Nonspacing mark.
    NSM,
    /// Boundary neutral.
    BN,

    // Neutral
    /// Paragraph separator.
    B,
    /// Segment separator.
    S,
    /// Whitespace.
    WS,
    /// Other neutral.
    ON,

    // Explicit formatting
    /// Left-to-right embedding.
    LRE,
    /// Left-to-right override.
    LRO,
    /// Right-to-left embedding.
    RLE,
    /// Right-to-left override.
    RLO,
    /// Pop directional format.
    PDF,
    /// Left-to-right isolate.
    LRI,
    /// Right-to-left isolate.
    RLI,
    /// First strong isolate.
    FSI,
    /// Pop directional isolate.
    PDI,

    /// Character removed by rule X9. Skipped by every later resolution phase and given a
    /// level from its neighbours at the end.
    Gap,
}

impl BidiType {
    /// L, R or AL.
    pub fn is_strong(self) -> bool {
        matches!(self, Self::L | Self::R | Self::AL)
    }

    /// LRI, RLI or FSI.
    pub fn is_isolate_initiator(self) -> bool {
        matches!(self, Self::LRI | Self::RLI | Self::FSI)
    }

    /// Types removed by X9: embeddings, overrides, PDF and BN.
    pub fn is_removed_by_x9(self) -> bool {
        matches!(
            self,
            Self::LRE | Self::RLE | Self::LRO | Self::RLO | Self::PDF | Self::BN
        )
    }

    /// Neutral or isolate formatting character ("NI" in N1/N2).
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(
            self,
            Self::B
                | Self::S
                | Self::WS
                | Self::ON
                | Self::LRI
                | Self::RLI
                | Self::FSI
                | Self::PDI
        )
    }

    /// Direction used when a resolved type bounds a neutral run: EN and AN count as R.
    pub(crate) fn strong_for_neutral(self) -> Option<BidiType> {
        match self {
            Self::L => Some(Self::L),
            Self::R | Self::AL | Self::EN | Self::AN => Some(Self::R),
            _ => None,
        }
    }

    /// R, AL, or an RTL embedding, override or isolate.
    pub(crate) fn triggers_bidi(self) -> bool {
        matches!(self, Self::R | Self::AL | Self::RLE | Self::RLO | Self::RLI)
    }
}

/// Arabic joining type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum JoiningType {
    /// U: never joins.
    #[default]
    NonJoining,
    /// R: joins with the preceding character only.
    Right,
    /// L: joins with the following character only.
    Left,
    /// D: joins on both sides.
    Dual,
    /// C: joins on both sides without changing shape (tatweel, ZWJ).
    Causing,
    /// T: ignored when deciding joins (marks).
    Transparent,
}

impl JoiningType {
    /// Whether a character of this type links to the character before it.
    pub(crate) fn joins_backward(self) -> bool {
        matches!(self, Self::Right | Self::Dual | Self::Causing)
    }

    /// Whether a character of this type links to the character after it.
    pub(crate) fn joins_forward(self) -> bool {
        matches!(self, Self::Left | Self::Dual | Self::Causing)
    }
}

/// Paired-bracket role (BD14/BD15), carrying the canonical partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Bracket {
    /// Not a paired bracket.
    #[default]
    None,
    /// Opening bracket; holds the canonical closing bracket.
    Open(char),
    /// Closing bracket; holds the canonical opening bracket.
    Close(char),
}

/// Paragraph direction hint for [`crate::BidiContext::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Force paragraph level 0.
    Ltr,
    /// Force paragraph level 1.
    Rtl,
    /// Detect from the first strong character (P2/P3), LTR if none.
    #[default]
    Auto,
}

impl From<i32> for BaseDirection {
    /// `0` forces LTR, positive values force RTL, negative values auto-detect.
    fn from(hint: i32) -> Self {
        match hint {
            0 => Self::Ltr,
            h if h > 0 => Self::Rtl,
            _ => Self::Auto,
        }
    }
}

/// Per-character state of a [`crate::BidiContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharInfo {
    /// Current (resolved) type; [`BidiType::Gap`] once removed by X9.
    pub ty: BidiType,
    /// Type from the character database, kept for L1.
    pub original: BidiType,
    /// Embedding level, `0..=MAX_LEVEL`.
    pub level: u8,
    /// Paired-bracket role.
    pub bracket: Bracket,
    /// Whether the character has a mirrored counterpart (L4).
    pub mirrored: bool,
    /// Arabic joining type.
    pub joining: JoiningType,
}

/// Entry on the directional status stack (X1–X8).
#[derive(Debug, Clone, Copy)]
pub(crate) struct DirectionalStatus {
    pub(crate) level: u8,
    pub(crate) overridden: Option<BidiType>,
    pub(crate) isolate: bool,
}

/// Maximum explicit embedding depth.
pub const MAX_DEPTH: u8 = 125;

/// Highest level any character can reach (I1/I2 may add 1 to `MAX_DEPTH`).
pub const MAX_LEVEL: u8 = MAX_DEPTH + 1;

/// Capacity of the paired-bracket stack (BD16).
pub const MAX_BRACKET_STACK: usize = 63;
