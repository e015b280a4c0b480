//! Phonology
//!
//! Letters and nuclei, stress, cluster legality and Ca gemination.

pub mod gemination;
pub mod letters;
pub mod phonotactics;
pub mod stress;

pub use gemination::geminate_ca;
pub use letters::{count_nuclei, has_geminate, is_consonant_cluster, nuclei, Nucleus};
pub use phonotactics::{is_legal_cluster, is_legal_word_initial};
pub use stress::{apply_stress, mark_stress, normalize, remove_stress, syllables, NormalizedWord, Stress};
