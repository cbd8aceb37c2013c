//! Backend dialect identities for sqlfacade
//!
//! A Dialect names one of the supported backend database products. It is
//! selected once per connection from the product name the real backend
//! reports and drives both rewrite-rule selection and identity masking.

use std::fmt;
use std::str::FromStr;

/// The supported backend products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
    Postgres,
    Snowflake,
    Sqlite,
    H2,
}

/// The fabricated identity reported to the client tool whenever the real
/// backend is not a native MySQL server.
#[derive(Debug, Clone, Copy)]
pub struct MaskedIdentity {
    pub product_name: &'static str,
    pub product_version: &'static str,
    pub major_version: i32,
    pub minor_version: i32,
}

pub const MASKED_IDENTITY: MaskedIdentity = MaskedIdentity {
    product_name: "MySQL",
    product_version: "8.0.0",
    major_version: 8,
    minor_version: 0,
};

/// Single decision point for identity masking. Every identity-bearing
/// metadata accessor consults this instead of re-implementing the check.
pub fn is_native_identity(product_name: &str) -> bool {
    product_name == MASKED_IDENTITY.product_name
}

impl Dialect {
    /// All dialects, in registration order.
    pub const ALL: [Dialect; 5] = [
        Dialect::MySql,
        Dialect::Postgres,
        Dialect::Snowflake,
        Dialect::Sqlite,
        Dialect::H2,
    ];

    /// The product name the backend reports for itself, as matched against
    /// the metadata identity. Exact case is significant.
    pub fn product_name(self) -> &'static str {
        match self {
            Dialect::MySql => "MySQL",
            Dialect::Postgres => "PostgreSQL",
            Dialect::Snowflake => "Snowflake",
            Dialect::Sqlite => "SQLite",
            Dialect::H2 => "H2",
        }
    }

    /// Short name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Snowflake => "snowflake",
            Dialect::Sqlite => "sqlite",
            Dialect::H2 => "h2",
        }
    }

    /// Accepted spellings for CLI/config lookup.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Dialect::MySql => &["mysql", "MySQL"],
            Dialect::Postgres => &["postgres", "postgresql", "PostgreSQL"],
            Dialect::Snowflake => &["snowflake", "Snowflake"],
            Dialect::Sqlite => &["sqlite", "sqlite3", "SQLite"],
            Dialect::H2 => &["h2", "H2"],
        }
    }

    /// Map a backend-reported product name to a dialect. Exact match, as
    /// reported by the drivers themselves. Unknown products get no dialect;
    /// the rewrite engine passes their queries through unchanged.
    pub fn from_product_name(product: &str) -> Option<Dialect> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.product_name() == product)
    }

    /// Dialects whose identifier quoting uses backticks natively. Queries
    /// for these backends keep their backtick quotes.
    pub fn is_backtick_native(self) -> bool {
        matches!(self, Dialect::MySql | Dialect::Sqlite)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown dialect: {0}")]
pub struct UnknownDialect(String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.aliases().iter().any(|a| a.eq_ignore_ascii_case(s)))
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}
