use std::{fmt, str::FromStr};

use snafu::Snafu;

/// The groups service templates are offered in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServiceCategory {
    Database,
    Cache,
    Monitoring,
    Mail,
    Storage,
    Search,
    Tool,
}

impl ServiceCategory {
    /// Every category, in the order the wizard asks about them.
    pub const ALL: [Self; 7] = [
        Self::Database,
        Self::Cache,
        Self::Monitoring,
        Self::Mail,
        Self::Storage,
        Self::Search,
        Self::Tool,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Database => "Database",
            Self::Cache => "Cache",
            Self::Monitoring => "Monitoring",
            Self::Mail => "Mail",
            Self::Storage => "Storage",
            Self::Search => "Search",
            Self::Tool => "Tool",
        }
    }

    /// Only one database can be picked; every other category allows several
    /// services.
    pub const fn allows_multi_selection(self) -> bool { !matches!(self, Self::Database) }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Cache => "cache",
            Self::Monitoring => "monitoring",
            Self::Mail => "mail",
            Self::Storage => "storage",
            Self::Search => "search",
            Self::Tool => "tool",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ServiceCategory {
    type Err = ParseServiceCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value_lowercase = value.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value_lowercase)
            .ok_or_else(|| ParseServiceCategoryError::Invalid { value: value.to_string() })
    }
}

#[derive(Debug, Snafu)]
pub enum ParseServiceCategoryError {
    #[snafu(display("'{value}' is not a valid service category"))]
    Invalid { value: String },
}
