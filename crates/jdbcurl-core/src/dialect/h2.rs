//! H2 URLs.
//!
//! - `jdbc:h2:mem:testdb` (in-memory)
//! - `jdbc:h2:~/test`, `jdbc:h2:file:/data/db` (file)
//! - `jdbc:h2:tcp://host:port/db`, `jdbc:h2:ssl://host:port/db` (server)
//!
//! Properties follow `;` (path) or `?` (query).

use crate::error::Result;
use crate::types::ParsedUrl;

use super::family::{self, SchemeFamily};
use super::Matched;

pub const H2: SchemeFamily = SchemeFamily {
    network: &[("tcp://", "TCP"), ("ssl://", "SSL")],
    local: &[("mem:", "MEMORY"), ("file:", "FILE")],
};

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    family::parse(matched, &H2)
}
