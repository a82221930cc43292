//! Flat network URLs: `jdbc:<product>://host[:port][,host[:port]...][/database][?props]`.
//!
//! Shared by MySQL, MariaDB and PostgreSQL. No derived properties are added.

use crate::error::Result;
use crate::primitives::{parse_host_list, parse_properties, split_first};
use crate::types::{ParsedUrl, PropertySource};

use super::Matched;

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    let remainder = matched.remainder();
    let remainder = remainder.strip_prefix("//").unwrap_or(remainder);

    let (main, query) = split_first(remainder, '?');
    let properties = parse_properties(query, PropertySource::Query);

    let (host_list, database) = split_first(main, '/');
    let hosts = parse_host_list(host_list)
        .ok_or_else(|| matched.malformed(format!("missing hostname in host list '{}'", host_list)))?;

    Ok(matched.finish(hosts, database.unwrap_or(""), properties))
}
