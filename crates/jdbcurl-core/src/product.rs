//! Supported database products and prefix-based detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme tag every JDBC URL starts with.
pub const JDBC_SCHEME: &str = "jdbc:";

/// Closed set of database products with a known URL grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "MYSQL")]
    MySql,
    #[serde(rename = "MARIADB")]
    MariaDb,
    #[serde(rename = "POSTGRESQL")]
    PostgreSql,
    #[serde(rename = "ORACLE")]
    Oracle,
    #[serde(rename = "SQLSERVER")]
    SqlServer,
    #[serde(rename = "H2")]
    H2,
    #[serde(rename = "HSQLDB")]
    Hsqldb,
    #[serde(rename = "DERBY")]
    Derby,
    #[serde(rename = "SQLITE")]
    Sqlite,
    /// Sentinel for anything no prefix matches.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Product {
    /// Every supported product, in detection order. The sentinel is excluded.
    pub const ALL: [Product; 9] = [
        Product::MySql,
        Product::MariaDb,
        Product::PostgreSql,
        Product::Oracle,
        Product::SqlServer,
        Product::H2,
        Product::Hsqldb,
        Product::Derby,
        Product::Sqlite,
    ];

    /// Lowercase product word as it appears after `jdbc:` (e.g. `"mysql"`).
    pub fn indicator(&self) -> &'static str {
        match self {
            Product::MySql => "mysql",
            Product::MariaDb => "mariadb",
            Product::PostgreSql => "postgresql",
            Product::Oracle => "oracle",
            Product::SqlServer => "sqlserver",
            Product::H2 => "h2",
            Product::Hsqldb => "hsqldb",
            Product::Derby => "derby",
            Product::Sqlite => "sqlite",
            Product::Unknown => "",
        }
    }

    /// Canonical URL prefix (e.g. `"jdbc:mysql:"`), empty for the sentinel.
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Product::MySql => "jdbc:mysql:",
            Product::MariaDb => "jdbc:mariadb:",
            Product::PostgreSql => "jdbc:postgresql:",
            Product::Oracle => "jdbc:oracle:",
            Product::SqlServer => "jdbc:sqlserver:",
            Product::H2 => "jdbc:h2:",
            Product::Hsqldb => "jdbc:hsqldb:",
            Product::Derby => "jdbc:derby:",
            Product::Sqlite => "jdbc:sqlite:",
            Product::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Product::Unknown
    }

    /// Detect the product from a URL's prefix, case-insensitively.
    ///
    /// Never fails: blank or unrecognized input yields [`Product::Unknown`].
    /// No two products share a prefix, so the first match is the only match.
    pub fn from_url(url: &str) -> Product {
        Product::ALL
            .into_iter()
            .find(|product| starts_with_ignore_case(url, product.url_prefix()))
            .unwrap_or(Product::Unknown)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::MySql => write!(f, "MYSQL"),
            Product::MariaDb => write!(f, "MARIADB"),
            Product::PostgreSql => write!(f, "POSTGRESQL"),
            Product::Oracle => write!(f, "ORACLE"),
            Product::SqlServer => write!(f, "SQLSERVER"),
            Product::H2 => write!(f, "H2"),
            Product::Hsqldb => write!(f, "HSQLDB"),
            Product::Derby => write!(f, "DERBY"),
            Product::Sqlite => write!(f, "SQLITE"),
            Product::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// ASCII case-insensitive `starts_with`. All prefixes we test are ASCII, so
/// this agrees with lowercasing the whole input first.
pub(crate) fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
