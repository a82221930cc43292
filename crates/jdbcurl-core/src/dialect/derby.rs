//! Apache Derby URLs. Properties always follow `;`.
//!
//! - `jdbc:derby:mydb[;create=true]` (embedded)
//! - `jdbc:derby:memory:testdb` (in-memory)
//! - `jdbc:derby://host:port/mydb` (network client)

use crate::error::Result;
use crate::primitives::{parse_properties, split_first};
use crate::types::{ParsedUrl, PropertySource};

use super::keys::MODE;
use super::{insert_derived, Matched};

const MEMORY_TOKEN: &str = "memory:";

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    if let Some(rest) = matched.remainder().strip_prefix("//") {
        return parse_network(matched, rest);
    }

    let (path, block) = split_first(matched.remainder(), ';');
    let mut properties = parse_properties(block, PropertySource::Path);

    let database = match path.strip_prefix(MEMORY_TOKEN) {
        Some(name) => {
            insert_derived(&mut properties, MODE, "MEMORY");
            name
        }
        None => {
            insert_derived(&mut properties, MODE, "EMBEDDED");
            path
        }
    };

    Ok(matched.finish(Vec::new(), database, properties))
}

fn parse_network(matched: Matched<'_>, rest: &str) -> Result<ParsedUrl> {
    let (main, block) = split_first(rest, ';');
    let mut properties = parse_properties(block, PropertySource::Path);

    let (host, database) = split_first(main, '/');
    let host = matched.require_host(host)?;
    insert_derived(&mut properties, MODE, "NETWORK");

    Ok(matched.finish(vec![host], database.unwrap_or(""), properties))
}
