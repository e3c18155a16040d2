//! Literal field keys shared by the origin databases.
//!
//! The nesting of these fields varies per origin schema; the key spellings
//! do not. Lookup is always via `ampscore_common::record::locate`.

pub const SEQUENCE: &str = "Sequence";
pub const TARGET_ORGANISM: &str = "Target Organism";
pub const BIOLOGICAL_ACTIVITY: &str = "Biological Activity";
pub const SIMILAR_SEQUENCES: &str = "Similar Sequences";
pub const STABILITY: &str = "Stability";
pub const HALF_LIFE: &str = "Half-life";

/// Hemolysis annotations, probed in order.
pub const HEMOLYSIS_KEYS: [&str; 4] = ["Hemolysis", "Hemolytic", "HC50", "HD50"];

/// Identifier fields, in resolution precedence order after the
/// cross-database canonical ID and the caller-supplied fallback.
pub const DRAMP_ID: &str = "DRAMP ID";
pub const SPADE_ID: &str = "SPADE ID";
pub const PEPTIDE_NAME: &str = "Peptide Name";
pub const GENERIC_ID: &str = "ID";
pub const GENERIC_NAME: &str = "Name";
