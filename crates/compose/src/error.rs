use std::path::PathBuf;

use snafu::Snafu;

/// Errors raised while reading or writing a compose document.
///
/// Parsing either returns a complete document or one of these errors; a
/// partially populated document is never handed out.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The compose file does not exist.
    #[snafu(display("File not found: {}", file_path.display()))]
    FileNotFound { file_path: PathBuf },

    /// The compose file exists but could not be read.
    #[snafu(display("Failed to read compose file {}, error: {source}", file_path.display()))]
    ReadFile { file_path: PathBuf, source: std::io::Error },

    /// The text is not valid YAML.
    #[snafu(display("Failed to decode compose document, error: {source}"))]
    Decode { source: serde_yaml::Error },

    /// The file content is not valid YAML.
    #[snafu(display("Failed to decode compose file {}, error: {source}", file_path.display()))]
    DecodeFile { file_path: PathBuf, source: serde_yaml::Error },

    /// The decoded root is not a mapping.
    #[snafu(display("Invalid compose document: expected a mapping at the top level, found {found}"))]
    InvalidDocument { found: &'static str },

    /// A value has a shape the document structure does not allow, e.g. a
    /// service entry that is a plain string.
    #[snafu(display("Invalid value at `{location}`: expected {expected}, found {found}"))]
    TypeMismatch { location: String, expected: &'static str, found: &'static str },

    /// An entry of a named collection is keyed by something other than a
    /// string.
    #[snafu(display("Invalid entry name in `{collection}`: expected a string, found {found}"))]
    InvalidName { collection: &'static str, found: &'static str },

    /// The document could not be encoded as YAML.
    #[snafu(display("Failed to encode compose document, error: {source}"))]
    Encode { source: serde_yaml::Error },
}
