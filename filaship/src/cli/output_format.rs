use std::{fmt, str::FromStr};

use snafu::Snafu;

/// How `parse` prints a compose document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Table,
    Yaml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Table => "table",
            Self::Yaml => "yaml",
            Self::Json => "json",
        };
        f.write_str(val)
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ParseOutputFormatError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseOutputFormatError {
    #[snafu(display("'{value}' is not a valid output format, expected table, yaml or json"))]
    Invalid { value: String },
}
