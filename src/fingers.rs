//! Pure accessors over the finger tables: hand ownership, redirect badness,
//! mnemonics and mirroring.

use crate::constants::*;
use crate::types::{Finger, Hand};

/// Which hand strikes with finger `f`.
#[inline(always)]
pub fn hand_of(f: Finger) -> Hand {
    if f.index() >= HAND_SPLIT as usize {
        Hand::Right
    } else {
        Hand::Left
    }
}

/// Boolean hand form: `hand(f) == (f >= 5)`.
#[inline(always)]
pub fn hand(f: Finger) -> bool {
    hand_of(f).is_right()
}

/// Redirect-badness flag from [`BAD_REDIRECT`].
#[inline(always)]
pub fn is_bad(f: Finger) -> bool {
    BAD_REDIRECT[f.index()]
}

pub fn mnemonic(f: Finger) -> &'static str {
    FINGER_MNEMONICS[f.index()]
}

/// The same finger on the other hand: `i -> 9 - i`.
#[inline(always)]
pub fn mirror(f: Finger) -> Finger {
    Finger::ALL[FINGER_COUNT - 1 - f.index()]
}
