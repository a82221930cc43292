//! # Parser Facade
//!
//! Entry points for decomposing a URL: detect the product, look up its
//! dialect in the [`Registry`], run it.
//!
//! [`JdbcUrlParser`] owns its registry so callers (and tests) can supply
//! their own bindings. The free functions at the bottom of this module go
//! through a lazily built parser with the standard registry.

use std::sync::LazyLock;

use crate::error::{JdbcUrlError, Result};
use crate::product::{starts_with_ignore_case, Product, JDBC_SCHEME};
use crate::registry::Registry;
use crate::types::ParsedUrl;

#[derive(Debug, Clone, Default)]
pub struct JdbcUrlParser {
    registry: Registry,
}

impl JdbcUrlParser {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decompose `url`, failing on blank input, an unknown product, or a
    /// grammar violation. Dialect errors are returned unchanged.
    pub fn parse(&self, url: &str) -> Result<ParsedUrl> {
        if url.trim().is_empty() {
            return Err(JdbcUrlError::invalid_input(url, "JDBC URL cannot be null or blank"));
        }
        tracing::debug!("Parsing JDBC URL: {}", url);

        if !is_recognized_url(url) {
            return Err(JdbcUrlError::unsupported(url, "JDBC URL must start with 'jdbc:'"));
        }

        let product = Product::from_url(url);
        if !product.is_known() {
            return Err(JdbcUrlError::unsupported(url, "Unknown or unsupported database type"));
        }
        tracing::debug!("Detected database type: {}", product);

        let dialect = self.registry.dialect_for(product).ok_or_else(|| {
            JdbcUrlError::unsupported(
                url,
                format!("No parser available for database type: {}", product),
            )
        })?;
        tracing::debug!("Using {} parser for {}", dialect, product);

        dialect.parse(url, product)
    }

    /// Like [`parse`](Self::parse) but any parse failure yields `None`.
    pub fn try_parse(&self, url: &str) -> Option<ParsedUrl> {
        self.parse(url)
            .inspect_err(|e| tracing::debug!("Failed to parse JDBC URL: {}", e))
            .ok()
    }
}

static DEFAULT_PARSER: LazyLock<JdbcUrlParser> = LazyLock::new(JdbcUrlParser::default);

/// Parse with the standard registry.
pub fn parse(url: &str) -> Result<ParsedUrl> {
    DEFAULT_PARSER.parse(url)
}

/// Best-effort parse with the standard registry.
pub fn try_parse(url: &str) -> Option<ParsedUrl> {
    DEFAULT_PARSER.try_parse(url)
}

/// True if `url` starts with `jdbc:` (case-insensitive), whatever follows.
pub fn is_recognized_url(url: &str) -> bool {
    starts_with_ignore_case(url, JDBC_SCHEME)
}

/// Product detection only. Never fails.
pub fn detect_product(url: &str) -> Product {
    Product::from_url(url)
}
