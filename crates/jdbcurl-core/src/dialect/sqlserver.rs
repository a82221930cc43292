//! SQL Server URLs: `jdbc:sqlserver://host[\instance][:port][;key=value...]`.
//!
//! Properties are always `;`-delimited and `?` has no special meaning. The
//! database is not positional: it comes from the `databaseName` property,
//! falling back to `database`.

use crate::error::Result;
use crate::primitives::{parse_properties, split_first};
use crate::types::{ParsedUrl, PropertySource};

use super::Matched;

const DATABASE_KEYS: [&str; 2] = ["databaseName", "database"];

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    let remainder = matched.remainder();
    let remainder = remainder.strip_prefix("//").unwrap_or(remainder);

    let (host, block) = split_first(remainder, ';');
    let host = matched.require_host(host)?;
    let properties = parse_properties(block, PropertySource::Path);

    let database = DATABASE_KEYS
        .iter()
        .find_map(|key| properties.get(*key))
        .map(|p| p.value.clone())
        .unwrap_or_default();

    Ok(matched.finish(vec![host], &database, properties))
}
