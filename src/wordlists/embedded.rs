//! Embedded word lists and frequency tables
//!
//! Word lists are compiled into the binary by the build script; the frequency
//! tables are embedded as JSON and parsed once when the corpus is built.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Letter → relative frequency in English text
pub const LETTER_FREQUENCIES_JSON: &str = include_str!("../../data/letter_frequencies.json");

/// Answer word → relative usage frequency
pub const WORD_FREQUENCIES_JSON: &str = include_str!("../../data/word_frequencies.json");
