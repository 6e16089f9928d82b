//! Helpers shared by the compose file commands.

mod compose_file;

pub use self::compose_file::ComposeFile;
