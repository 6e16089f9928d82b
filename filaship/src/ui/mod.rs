//! Terminal UI pieces: the fuzzy finder used by the wizard, text prompts,
//! summary tables and the progress spinner.

pub mod fuzzy_finder;
pub mod prompt;
mod spinner;
pub mod table;

pub use self::spinner::Spinner;
