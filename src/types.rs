//! Core types: fingers, hands, trigrams and category labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;

// ── Finger ──

/// One of the ten fingers, indexed as in [`FINGER_MNEMONICS`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Finger(u8);

impl Finger {
    /// All fingers in index order.
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger(0),
        Finger(1),
        Finger(2),
        Finger(3),
        Finger(4),
        Finger(5),
        Finger(6),
        Finger(7),
        Finger(8),
        Finger(9),
    ];

    /// Returns `None` for indices outside `0..FINGER_COUNT`.
    pub fn new(index: u8) -> Option<Finger> {
        ((index as usize) < FINGER_COUNT).then_some(Finger(index))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Look up a finger by its two-letter mnemonic.
    pub fn from_mnemonic(code: &str) -> Option<Finger> {
        FINGER_MNEMONICS
            .iter()
            .position(|&m| m == code)
            .map(|i| Finger(i as u8))
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FINGER_MNEMONICS[self.index()])
    }
}

// ── Hand ──

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Boolean form used by the direction tests: `true` for the right hand.
    #[inline(always)]
    pub fn is_right(self) -> bool {
        self == Hand::Right
    }
}

// ── Trigram ──

/// An ordered triple of fingers struck in sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Trigram(pub [Finger; 3]);

impl Trigram {
    pub fn new(f0: Finger, f1: Finger, f2: Finger) -> Self {
        Trigram([f0, f1, f2])
    }

    /// Build from raw indices. Returns `None` if any index is out of range.
    pub fn from_indices(f0: u8, f1: u8, f2: u8) -> Option<Self> {
        Some(Trigram([Finger::new(f0)?, Finger::new(f1)?, Finger::new(f2)?]))
    }

    /// All 1000 trigrams in generation order (ascending f0, f1, f2).
    pub fn all() -> impl Iterator<Item = Trigram> {
        Finger::ALL.into_iter().flat_map(|f0| {
            Finger::ALL.into_iter().flat_map(move |f1| {
                Finger::ALL
                    .into_iter()
                    .map(move |f2| Trigram::new(f0, f1, f2))
            })
        })
    }

    /// Position in generation order.
    pub fn index(&self) -> usize {
        let [f0, f1, f2] = self.0;
        trigram_index(f0.index(), f1.index(), f2.index())
    }

    /// Table key: the three mnemonics concatenated, e.g. `"LPLRLM"`.
    pub fn key(&self) -> String {
        let mut s = String::with_capacity(TRIGRAM_KEY_LEN);
        for f in self.0 {
            s.push_str(FINGER_MNEMONICS[f.index()]);
        }
        s
    }

    /// Parse a table key back into a trigram.
    pub fn from_key(key: &str) -> Option<Trigram> {
        if key.len() != TRIGRAM_KEY_LEN || !key.is_ascii() {
            return None;
        }
        Some(Trigram([
            Finger::from_mnemonic(&key[0..2])?,
            Finger::from_mnemonic(&key[2..4])?,
            Finger::from_mnemonic(&key[4..6])?,
        ]))
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

// ── Classification branch ──

/// The top-level test of the cascade that decided a trigram's category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Branch {
    SameFinger,
    Alternation,
    SameHand,
    Roll,
}

// ── Category ──

/// Ergonomic category of a trigram. Serialized as the short label string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "sft")]
    Sft,
    #[serde(rename = "sfb")]
    Sfb,
    #[serde(rename = "alt")]
    Alt,
    #[serde(rename = "alt-sfs")]
    AltSfs,
    #[serde(rename = "inoneh")]
    InOneHand,
    #[serde(rename = "outoneh")]
    OutOneHand,
    #[serde(rename = "red")]
    Redirect,
    #[serde(rename = "red-sfs")]
    RedirectSfs,
    #[serde(rename = "bad-red")]
    BadRedirect,
    #[serde(rename = "bad-red-sfs")]
    BadRedirectSfs,
    #[serde(rename = "inroll")]
    InRoll,
    #[serde(rename = "outroll")]
    OutRoll,
}

impl Category {
    pub const COUNT: usize = 12;

    /// All categories, grouped by branch.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Sft,
        Category::Sfb,
        Category::Alt,
        Category::AltSfs,
        Category::InOneHand,
        Category::OutOneHand,
        Category::Redirect,
        Category::RedirectSfs,
        Category::BadRedirect,
        Category::BadRedirectSfs,
        Category::InRoll,
        Category::OutRoll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sft => "sft",
            Category::Sfb => "sfb",
            Category::Alt => "alt",
            Category::AltSfs => "alt-sfs",
            Category::InOneHand => "inoneh",
            Category::OutOneHand => "outoneh",
            Category::Redirect => "red",
            Category::RedirectSfs => "red-sfs",
            Category::BadRedirect => "bad-red",
            Category::BadRedirectSfs => "bad-red-sfs",
            Category::InRoll => "inroll",
            Category::OutRoll => "outroll",
        }
    }

    /// The cascade branch that can produce this category.
    pub fn branch(&self) -> Branch {
        match self {
            Category::Sft | Category::Sfb => Branch::SameFinger,
            Category::Alt | Category::AltSfs => Branch::Alternation,
            Category::InOneHand
            | Category::OutOneHand
            | Category::Redirect
            | Category::RedirectSfs
            | Category::BadRedirect
            | Category::BadRedirectSfs => Branch::SameHand,
            Category::InRoll | Category::OutRoll => Branch::Roll,
        }
    }

    /// Counterpart with the opposite direction, for directional categories.
    pub fn reversed(&self) -> Option<Category> {
        match self {
            Category::InOneHand => Some(Category::OutOneHand),
            Category::OutOneHand => Some(Category::InOneHand),
            Category::InRoll => Some(Category::OutRoll),
            Category::OutRoll => Some(Category::InRoll),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category label: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_new_rejects_out_of_range() {
        assert!(Finger::new(9).is_some());
        assert!(Finger::new(10).is_none());
        assert!(Finger::new(255).is_none());
    }

    #[test]
    fn test_trigram_key() {
        let t = Trigram::from_indices(0, 1, 2).unwrap();
        assert_eq!(t.key(), "LPLRLM");
        assert_eq!(Trigram::from_key("LPLRLM"), Some(t));
        assert_eq!(Trigram::from_key("RPRTLI").unwrap().index(), 953);
    }

    #[test]
    fn test_trigram_from_key_invalid() {
        assert_eq!(Trigram::from_key(""), None);
        assert_eq!(Trigram::from_key("LPLR"), None);
        assert_eq!(Trigram::from_key("LPLRXX"), None);
        assert_eq!(Trigram::from_key("lplrlm"), None);
        assert_eq!(Trigram::from_key("LPLRLMLI"), None);
    }

    #[test]
    fn test_all_in_generation_order() {
        let all: Vec<Trigram> = Trigram::all().collect();
        assert_eq!(all.len(), NUM_TRIGRAMS);
        for (i, t) in all.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_category_labels_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
        assert!("roll".parse::<Category>().is_err());
    }

    #[test]
    fn test_reversed_is_involution() {
        for c in Category::ALL {
            if let Some(r) = c.reversed() {
                assert_eq!(r.reversed(), Some(c));
                assert_eq!(r.branch(), c.branch());
            }
        }
    }
}
