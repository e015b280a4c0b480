//! Ithkuil morphology codec
//!
//! Generates surface words from grammatical records and analyzes surface
//! words back into records, for three word classes:
//! - formatives (root words with their slot-by-slot categories)
//! - referentials (personal-reference words)
//! - adjuncts (parsing, register, numeric, bias, suppletive, modular and
//!   affixual)
//!
//! Analysis returns `Ok(None)` when no grammar recognizes a word and an error
//! when a grammar matched but a slot is invalid.

pub mod error;
pub mod config;
pub mod phonology;
pub mod category;
pub mod vowel;
pub mod grammar;
pub mod ca;
pub mod affix;
pub mod formative;
pub mod referential;
pub mod adjunct;
pub mod analysis;

// Re-exports for convenience
pub use adjunct::{analyze_adjunct, generate_adjunct, Adjunct};
pub use affix::Affix;
pub use analysis::{analyze_word, generate_word, Analysis, Decomposition, Morpheme, Word, WordClass};
pub use ca::CaBundle;
pub use config::{GenerationOptions, ShortcutPolicy};
pub use error::{CodecError, Result};
pub use formative::{analyze_formative, generate_formative, Formative, Root};
pub use phonology::{normalize, Stress};
pub use referential::{analyze_referential, generate_referential, Referential};
