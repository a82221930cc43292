//! SQLite URLs: `jdbc:sqlite:path[?props]`. Always file-based.

use crate::error::Result;
use crate::primitives::{parse_properties, split_first};
use crate::types::{ParsedUrl, PropertySource};

use super::keys::MODE;
use super::{insert_derived, Matched};

/// Canonical in-memory database name.
pub const MEMORY_DATABASE: &str = ":memory:";

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    let (path, query) = split_first(matched.remainder(), '?');
    let mut properties = parse_properties(query, PropertySource::Query);

    let database = if path == MEMORY_DATABASE || path == "memory:" {
        insert_derived(&mut properties, MODE, "MEMORY");
        MEMORY_DATABASE
    } else {
        insert_derived(&mut properties, MODE, "FILE");
        path
    };

    Ok(matched.finish(Vec::new(), database, properties))
}
