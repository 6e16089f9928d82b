use std::{fmt, str::FromStr};

use snafu::Snafu;

/// What `init` does when a compose file already exists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InitMode {
    #[default]
    Add,
    Recreate,
    Cancel,
}

impl InitMode {
    pub const ALL: [Self; 3] = [Self::Add, Self::Recreate, Self::Cancel];

    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "Add new services to existing file",
            Self::Recreate => "Recreate the entire file",
            Self::Cancel => "Cancel and exit",
        }
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Add => "add",
            Self::Recreate => "recreate",
            Self::Cancel => "cancel",
        };
        f.write_str(val)
    }
}

impl FromStr for InitMode {
    type Err = ParseInitModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "recreate" => Ok(Self::Recreate),
            "cancel" => Ok(Self::Cancel),
            _ => Err(ParseInitModeError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseInitModeError {
    #[snafu(display("'{value}' is not a valid mode, expected add, recreate or cancel"))]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("add".parse::<InitMode>().unwrap(), InitMode::Add);
        assert_eq!("Recreate".parse::<InitMode>().unwrap(), InitMode::Recreate);
        assert_eq!("CANCEL".parse::<InitMode>().unwrap(), InitMode::Cancel);
        assert!("merge".parse::<InitMode>().is_err());
        assert_eq!(InitMode::default(), InitMode::Add);
    }
}
