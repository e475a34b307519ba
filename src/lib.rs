//! # Trigram Table — typing-ergonomics classification of finger trigrams
//!
//! Classifies every ordered triple of fingers (10 × 10 × 10 = 1000 trigrams)
//! into one ergonomic category and writes the result as a JSON lookup table
//! keyed by finger mnemonics, e.g. `"LPLRLM": "inoneh"`.
//!
//! ## Pipeline
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | 0 | [`constants`], [`fingers`] | Static finger tables: mnemonics, hand split, redirect badness |
//! | 1 | [`mod@classify`] | Ordered rule cascade: same finger → alternation → same hand → roll |
//! | 2 | [`table`] | Enumerate trigrams in ascending (f0, f1, f2) order into an insertion-ordered map |
//! | 3 | [`storage`] | Serialize the map to JSON, or load a persisted one back |
//!
//! ## Categories
//!
//! - `sft` / `sfb`: same finger three times / on one adjacent pair
//! - `alt` / `alt-sfs`: hand changes on both transitions
//! - `inoneh` / `outoneh`: monotonic one-hand run toward / away from the thumb
//! - `red`, `red-sfs`, `bad-red`, `bad-red-sfs`: one-hand direction change
//! - `inroll` / `outroll`: one same-hand pair inside a cross-hand trigram
//!
//! The `-sfs` suffix marks trigrams whose first and last finger coincide.
//! A redirect is "bad" when all three fingers are pinky, ring or middle.

pub mod classify;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod fingers;
pub mod storage;
pub mod table;
pub mod types;

pub use classify::{branch, classify};
pub use error::{TableError, TableResult};
pub use table::TrigramTable;
pub use types::{Branch, Category, Finger, Hand, Trigram};
