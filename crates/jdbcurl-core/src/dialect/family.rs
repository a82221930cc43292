//! Shared grammar for the sub-scheme family (H2, HSQLDB):
//! `jdbc:<product>:[subscheme:]path-or-host[;props][?props]`.
//!
//! A network sub-scheme (`tcp://`, `hsql://`, ...) turns the main part into
//! `host[:port]/database` and always sets `MODE` to the scheme name. A local
//! sub-scheme (`mem:`, `file:`, `res:`) is stripped and sets a default `MODE`
//! unless the URL already supplied one. No sub-scheme means a file path.

use crate::error::Result;
use crate::primitives::{parse_properties, split_first, split_first_of_either};
use crate::types::{ParsedUrl, PropertySource};

use super::keys::MODE;
use super::{insert_derived, Matched};

/// Sub-scheme tables for one product.
#[derive(Debug, Clone, Copy)]
pub struct SchemeFamily {
    /// `(token, MODE value)` pairs for network access, e.g. `("tcp://", "TCP")`.
    pub network: &'static [(&'static str, &'static str)],
    /// `(token, MODE value)` pairs for local storage, e.g. `("mem:", "MEMORY")`.
    pub local: &'static [(&'static str, &'static str)],
}

/// `MODE` recorded when the main part carries no sub-scheme.
pub const DEFAULT_MODE: &str = "FILE";

pub(crate) fn parse(matched: Matched<'_>, family: &SchemeFamily) -> Result<ParsedUrl> {
    let remainder = matched.remainder();
    let (main, block) = split_first_of_either(remainder, ';', '?');

    // One provenance for the whole block: any `?` makes it a query.
    let source = if remainder.contains('?') {
        PropertySource::Query
    } else {
        PropertySource::Path
    };
    let mut properties = parse_properties(block, source);

    for (token, mode) in family.network {
        if let Some(rest) = main.strip_prefix(token) {
            let (host, database) = split_first(rest, '/');
            let host = matched.require_host(host)?;
            insert_derived(&mut properties, MODE, mode);
            return Ok(matched.finish(vec![host], database.unwrap_or(""), properties));
        }
    }

    let (database, mode) = family
        .local
        .iter()
        .find_map(|(token, mode)| main.strip_prefix(token).map(|rest| (rest, *mode)))
        .unwrap_or((main, DEFAULT_MODE));

    if !properties.contains_key(MODE) {
        insert_derived(&mut properties, MODE, mode);
    }

    Ok(matched.finish(Vec::new(), database, properties))
}
