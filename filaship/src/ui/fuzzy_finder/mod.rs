//! Interactive selection with the `skim` fuzzy finder.

mod choice;

/// Separates the value of a choice from its description in the finder.
pub const COLUMN_SEPARATOR: &str = "\t";

pub use self::choice::{Choice, ChoiceListExt};
