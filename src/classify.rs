//! Trigram classification cascade.
//!
//! Four ordered, mutually exclusive tests; the first match wins:
//!
//! | # | Test | Guard | Labels |
//! |---|------|-------|--------|
//! | 1 | same finger | `f0 == f1 \|\| f1 == f2` | `sft`, `sfb` |
//! | 2 | alternation | hand changes on both transitions | `alt`, `alt-sfs` |
//! | 3 | same hand | all three on one hand | `inoneh`, `outoneh`, `red`, `red-sfs`, `bad-red`, `bad-red-sfs` |
//! | 4 | roll | exactly one hand transition | `inroll`, `outroll` |
//!
//! Direction convention: with `hand` as a boolean (`true` = right), a
//! movement toward lower indices counts as inward exactly when the hand is
//! the right one. Lower indices run toward the thumb on the right hand and
//! toward the pinky on the left, so "in" always means toward the thumb.

use crate::fingers::{hand, is_bad};
use crate::types::{Branch, Category, Trigram};

/// Which top-level test of the cascade matches `t`.
pub fn branch(t: &Trigram) -> Branch {
    let [f0, f1, f2] = t.0;
    let (h0, h1, h2) = (hand(f0), hand(f1), hand(f2));

    if f0 == f1 || f1 == f2 {
        Branch::SameFinger
    } else if h0 != h1 && h1 != h2 {
        Branch::Alternation
    } else if h0 == h1 && h1 == h2 {
        Branch::SameHand
    } else {
        Branch::Roll
    }
}

/// Classify a trigram. Total over all 1000 trigrams.
pub fn classify(t: &Trigram) -> Category {
    let [f0, f1, f2] = t.0;
    let sfs = f0 == f2;

    match branch(t) {
        Branch::SameFinger => {
            if sfs {
                Category::Sft
            } else {
                Category::Sfb
            }
        }
        Branch::Alternation => {
            if sfs {
                Category::AltSfs
            } else {
                Category::Alt
            }
        }
        Branch::SameHand => classify_same_hand(t),
        Branch::Roll => classify_roll(t),
    }
}

/// One-hand run or redirect. Caller guarantees all three fingers share a hand
/// and no adjacent pair repeats.
fn classify_same_hand(t: &Trigram) -> Category {
    let [f0, f1, f2] = t.0;

    let descending = f0 > f1 && f1 > f2;
    if descending || (f0 < f1 && f1 < f2) {
        return if descending == hand(f0) {
            Category::InOneHand
        } else {
            Category::OutOneHand
        };
    }

    let bad = is_bad(f0) && is_bad(f1) && is_bad(f2);
    match (f0 == f2, bad) {
        (true, true) => Category::BadRedirectSfs,
        (true, false) => Category::RedirectSfs,
        (false, true) => Category::BadRedirect,
        (false, false) => Category::Redirect,
    }
}

/// Roll direction of the single same-hand pair. The pair always contains
/// `f1`, so its hand owns the roll.
fn classify_roll(t: &Trigram) -> Category {
    let [f0, f1, f2] = t.0;
    let (a, b) = if hand(f1) == hand(f2) { (f1, f2) } else { (f0, f1) };

    if (a > b) == hand(f1) {
        Category::InRoll
    } else {
        Category::OutRoll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(f0: u8, f1: u8, f2: u8) -> Trigram {
        Trigram::from_indices(f0, f1, f2).unwrap()
    }

    fn label(f0: u8, f1: u8, f2: u8) -> &'static str {
        classify(&tri(f0, f1, f2)).as_str()
    }

    #[test]
    fn test_same_finger() {
        assert_eq!(label(0, 0, 0), "sft");
        assert_eq!(label(9, 9, 9), "sft");
        assert_eq!(label(0, 0, 1), "sfb");
        assert_eq!(label(3, 7, 7), "sfb");
        // Cross-hand repeat is still caught by the first test.
        assert_eq!(label(5, 5, 0), "sfb");
    }

    #[test]
    fn test_alternation() {
        assert_eq!(label(1, 6, 2), "alt");
        assert_eq!(label(1, 6, 1), "alt-sfs");
        assert_eq!(label(9, 0, 9), "alt-sfs");
    }

    #[test]
    fn test_one_hand_runs() {
        assert_eq!(label(0, 2, 4), "inoneh");
        assert_eq!(label(4, 3, 2), "outoneh");
        assert_eq!(label(9, 7, 5), "inoneh");
        assert_eq!(label(5, 6, 7), "outoneh");
    }

    #[test]
    fn test_redirects() {
        assert_eq!(label(0, 1, 0), "bad-red-sfs");
        assert_eq!(label(0, 2, 1), "bad-red");
        assert_eq!(label(3, 4, 3), "red-sfs");
        assert_eq!(label(0, 3, 1), "red");
        assert_eq!(label(7, 9, 8), "bad-red");
        assert_eq!(label(6, 5, 6), "red-sfs");
    }

    #[test]
    fn test_rolls() {
        assert_eq!(label(0, 5, 9), "outroll");
        assert_eq!(label(0, 9, 5), "inroll");
        assert_eq!(label(0, 2, 7), "inroll");
        assert_eq!(label(2, 0, 7), "outroll");
        assert_eq!(label(9, 4, 0), "outroll");
    }

    #[test]
    fn test_branch_matches_category() {
        for t in Trigram::all() {
            assert_eq!(classify(&t).branch(), branch(&t), "trigram {t}");
        }
    }
}
