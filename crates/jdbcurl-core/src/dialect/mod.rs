//! # Dialect Parsers
//!
//! One grammar per database family. The set is closed: [`Dialect`] is a plain
//! enum, and the registry decides which products each variant handles.
//!
//! Every parser receives a [`Matched`] URL whose product prefix has already
//! been stripped, decomposes the remainder with the shared primitives, and
//! returns a complete [`ParsedUrl`] or one [`JdbcUrlError`]. Nothing partial
//! is ever returned.

pub mod derby;
pub mod descriptor;
pub mod family;
pub mod generic;
pub mod h2;
pub mod hsqldb;
pub mod oracle;
pub mod sqlite;
pub mod sqlserver;

use std::fmt;

use crate::error::{JdbcUrlError, Result};
use crate::product::{starts_with_ignore_case, Product};
use crate::types::{Host, ParsedUrl, Properties, Property, PropertySource};

/// Well-known keys of properties the parsers add themselves.
pub mod keys {
    /// Storage or transport mode (`FILE`, `MEMORY`, `TCP`, `NETWORK`, ...).
    pub const MODE: &str = "MODE";
    /// Oracle driver type segment (`thin`, `oci`, ...).
    pub const DRIVER_TYPE: &str = "DRIVER_TYPE";
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    pub const SID: &str = "SID";
    /// Full Oracle connect descriptor text.
    pub const DESCRIPTOR: &str = "DESCRIPTOR";
}

/// The grammar used to decompose a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `scheme://host[,host...][/database][?props]` (MySQL, MariaDB, PostgreSQL).
    GenericNetwork,
    Oracle,
    SqlServer,
    H2,
    Hsqldb,
    Derby,
    Sqlite,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::GenericNetwork => "generic-network",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
            Dialect::H2 => "h2",
            Dialect::Hsqldb => "hsqldb",
            Dialect::Derby => "derby",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Decompose `url` as `product` using this dialect's grammar.
    pub fn parse(&self, url: &str, product: Product) -> Result<ParsedUrl> {
        let matched = Matched::new(url, product)?;
        match self {
            Dialect::GenericNetwork => generic::parse(matched),
            Dialect::Oracle => oracle::parse(matched),
            Dialect::SqlServer => sqlserver::parse(matched),
            Dialect::H2 => h2::parse(matched),
            Dialect::Hsqldb => hsqldb::parse(matched),
            Dialect::Derby => derby::parse(matched),
            Dialect::Sqlite => sqlite::parse(matched),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A URL whose product prefix has been verified and stripped.
#[derive(Debug, Clone, Copy)]
pub struct Matched<'a> {
    url: &'a str,
    product: Product,
    remainder: &'a str,
}

impl<'a> Matched<'a> {
    /// Verify that `url` starts with `product`'s prefix and strip it.
    pub fn new(url: &'a str, product: Product) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(JdbcUrlError::invalid_input(url, "JDBC URL cannot be null or blank"));
        }
        let prefix = product.url_prefix();
        if !product.is_known() || !starts_with_ignore_case(url, prefix) {
            return Err(JdbcUrlError::malformed(
                url,
                product,
                format!("URL does not match expected prefix: {}", prefix),
            ));
        }
        Ok(Self {
            url,
            product,
            remainder: &url[prefix.len()..],
        })
    }

    pub fn url(&self) -> &'a str {
        self.url
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Everything after the product prefix.
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }

    pub(crate) fn malformed(&self, message: impl Into<String>) -> JdbcUrlError {
        JdbcUrlError::malformed(self.url, self.product, message)
    }

    /// Parse a single required host, raising a syntax error if it is blank.
    pub(crate) fn require_host(&self, host: &str) -> Result<Host> {
        crate::primitives::parse_host(host)
            .ok_or_else(|| self.malformed(format!("missing hostname in '{}'", host)))
    }

    pub(crate) fn finish(
        self,
        hosts: Vec<Host>,
        database_name: &str,
        properties: Properties,
    ) -> ParsedUrl {
        ParsedUrl::new(self.url, self.product, hosts, database_name, properties)
    }
}

/// Record a property computed from the URL structure. Overwrites any value.
pub(crate) fn insert_derived(properties: &mut Properties, key: &str, value: &str) {
    properties.insert(key.to_string(), Property::new(PropertySource::Derived, value));
}

/// Record a property taken from a structured connection descriptor.
pub(crate) fn insert_descriptor(properties: &mut Properties, key: &str, value: &str) {
    properties.insert(key.to_string(), Property::new(PropertySource::Descriptor, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_matched_strips_prefix_case_insensitively() {
        let matched = Matched::new("JDBC:MYSQL://h/db", Product::MySql).unwrap();
        assert_eq!(matched.remainder(), "//h/db");
    }

    #[test]
    fn test_matched_rejects_wrong_product() {
        let err = Matched::new("jdbc:mysql://h/db", Product::PostgreSql).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSyntax);
        assert!(err.message().contains("jdbc:postgresql:"));
    }

    #[test]
    fn test_matched_rejects_blank() {
        let err = Matched::new("  ", Product::MySql).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_matched_rejects_unknown_product() {
        let err = Matched::new("jdbc:mysql://h/db", Product::Unknown).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSyntax);
    }

    #[test]
    fn test_dialect_parse_direct() {
        let parsed = Dialect::Sqlite.parse("jdbc:sqlite:app.db", Product::Sqlite).unwrap();
        assert_eq!(parsed.database_name(), "app.db");
    }

    #[test]
    fn test_insert_derived_overwrites_in_place() {
        let mut props = Properties::new();
        props.insert("MODE".into(), Property::new(PropertySource::Path, "MySQL"));
        props.insert("x".into(), Property::new(PropertySource::Path, "1"));
        insert_derived(&mut props, keys::MODE, "TCP");
        assert_eq!(props.get_index(0).map(|(k, _)| k.as_str()), Some("MODE"));
        assert_eq!(props["MODE"], Property::new(PropertySource::Derived, "TCP"));
    }
}
