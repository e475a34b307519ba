//! Finger tables and trigram-indexing functions.
//!
//! Positions 0..5 belong to the left hand, 5..10 to the right, ordered
//! pinky → thumb → thumb → pinky so that position `i` mirrors `9 - i`:
//!
//! | idx | 0  | 1  | 2  | 3  | 4  | 5  | 6  | 7  | 8  | 9  |
//! |-----|----|----|----|----|----|----|----|----|----|----|
//! | key | LP | LR | LM | LI | LT | RT | RI | RM | RR | RP |
//! | bad | ✓  | ✓  | ✓  |    |    |    |    | ✓  | ✓  | ✓  |

/// Number of fingers on both hands.
pub const FINGER_COUNT: usize = 10;

/// First finger index on the right hand. `hand(f) == (f >= HAND_SPLIT)`.
pub const HAND_SPLIT: u8 = 5;

/// Number of ordered finger triples: 10³.
pub const NUM_TRIGRAMS: usize = FINGER_COUNT * FINGER_COUNT * FINGER_COUNT;

/// Length of a serialized trigram key (three two-letter mnemonics).
pub const TRIGRAM_KEY_LEN: usize = 6;

/// Two-letter finger mnemonics. The order is load-bearing: it fixes the hand
/// split and the mirror pairs used by the direction tests.
pub const FINGER_MNEMONICS: [&str; FINGER_COUNT] =
    ["LP", "LR", "LM", "LI", "LT", "RT", "RI", "RM", "RR", "RP"];

/// Redirect-badness flag per finger. A redirect is "bad" only when all three
/// fingers are flagged.
pub const BAD_REDIRECT: [bool; FINGER_COUNT] = [
    true, true, true, false, false, false, false, true, true, true,
];

/// Default artifact path, relative to the base path.
pub const DEFAULT_OUTPUT_PATH: &str = "table.json";

/// Map trigram (f0, f1, f2) to its position in generation order.
///
/// Generation order is ascending f0, then f1, then f2, so this is simply the
/// base-10 number `f0 f1 f2`.
#[inline(always)]
pub fn trigram_index(f0: usize, f1: usize, f2: usize) -> usize {
    (f0 * FINGER_COUNT + f1) * FINGER_COUNT + f2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_index_bounds() {
        assert_eq!(trigram_index(0, 0, 0), 0);
        assert_eq!(trigram_index(9, 9, 9), NUM_TRIGRAMS - 1);
        assert_eq!(trigram_index(1, 6, 2), 162);
    }

    #[test]
    fn test_mnemonics_mirror() {
        for i in 0..FINGER_COUNT {
            let (a, b) = (FINGER_MNEMONICS[i], FINGER_MNEMONICS[FINGER_COUNT - 1 - i]);
            assert_eq!(&a[1..], &b[1..], "{a} / {b}");
            assert_ne!(&a[..1], &b[..1]);
            assert_eq!(BAD_REDIRECT[i], BAD_REDIRECT[FINGER_COUNT - 1 - i]);
        }
    }
}
