//! # Error Types
//!
//! Defines `JdbcUrlError`, the closed set of failures a parse can end in.
//! Every variant carries the offending URL verbatim so the rendered message
//! can be pasted straight into a bug report.
//!
//! Recoverable anomalies (an unparsable port, a missing database segment)
//! are never errors: they degrade to an absent port or an empty database
//! name inside the dialect parsers.

use std::fmt;

use thiserror::Error;

use crate::product::Product;

/// All errors that can occur while decomposing a JDBC URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JdbcUrlError {
    /// Blank input handed to the strict entry point. Never reaches a dialect.
    #[error("{message} [URL: {url}]")]
    InvalidInput { url: String, message: String },

    /// The URL does not carry the `jdbc:` tag or names no supported product.
    #[error("{message} [URL: {url}]")]
    UnsupportedProduct { url: String, message: String },

    /// The product prefix matched but the rest violates that dialect's grammar.
    #[error("Malformed {product} URL: {message} [URL: {url}]")]
    MalformedSyntax {
        url: String,
        product: Product,
        message: String,
    },
}

/// Discriminant of a [`JdbcUrlError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedProduct,
    MalformedSyntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::UnsupportedProduct => write!(f, "unsupported product"),
            ErrorKind::MalformedSyntax => write!(f, "malformed syntax"),
        }
    }
}

impl JdbcUrlError {
    pub(crate) fn invalid_input(url: &str, message: impl Into<String>) -> Self {
        JdbcUrlError::InvalidInput {
            url: url.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(url: &str, message: impl Into<String>) -> Self {
        JdbcUrlError::UnsupportedProduct {
            url: url.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(url: &str, product: Product, message: impl Into<String>) -> Self {
        JdbcUrlError::MalformedSyntax {
            url: url.to_string(),
            product,
            message: message.into(),
        }
    }

    /// The URL that failed to parse, exactly as it was given.
    pub fn url(&self) -> &str {
        match self {
            JdbcUrlError::InvalidInput { url, .. }
            | JdbcUrlError::UnsupportedProduct { url, .. }
            | JdbcUrlError::MalformedSyntax { url, .. } => url,
        }
    }

    /// The failure description without the URL suffix.
    pub fn message(&self) -> &str {
        match self {
            JdbcUrlError::InvalidInput { message, .. }
            | JdbcUrlError::UnsupportedProduct { message, .. }
            | JdbcUrlError::MalformedSyntax { message, .. } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            JdbcUrlError::InvalidInput { .. } => ErrorKind::InvalidInput,
            JdbcUrlError::UnsupportedProduct { .. } => ErrorKind::UnsupportedProduct,
            JdbcUrlError::MalformedSyntax { .. } => ErrorKind::MalformedSyntax,
        }
    }
}

/// Failure to read or validate `jdbcurl.toml`.
///
/// Kept apart from [`JdbcUrlError`] so that `try_parse` can never swallow a
/// configuration mistake.
#[derive(Error, Debug)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    pub message: String,
}

pub type Result<T> = std::result::Result<T, JdbcUrlError>;
