//! HSQLDB (HyperSQL) URLs.
//!
//! - `jdbc:hsqldb:mem:testdb`, `jdbc:hsqldb:file:/opt/db`, `jdbc:hsqldb:res:/org/db`
//! - `jdbc:hsqldb:hsql://host:port/db` and `hsqls://`, `http://`, `https://`

use crate::error::Result;
use crate::types::ParsedUrl;

use super::family::{self, SchemeFamily};
use super::Matched;

pub const HSQLDB: SchemeFamily = SchemeFamily {
    network: &[
        ("hsqls://", "HSQLS"),
        ("hsql://", "HSQL"),
        ("https://", "HTTPS"),
        ("http://", "HTTP"),
    ],
    local: &[("mem:", "MEMORY"), ("file:", "FILE"), ("res:", "RESOURCE")],
};

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    family::parse(matched, &HSQLDB)
}

#[cfg(test)]
mod tests {
    use crate::dialect::{keys, Dialect};
    use crate::product::Product;
    use crate::types::{Host, ParsedUrl};

    fn parse(url: &str) -> ParsedUrl {
        Dialect::Hsqldb.parse(url, Product::Hsqldb).unwrap()
    }

    #[test]
    fn test_in_memory() {
        let parsed = parse("jdbc:hsqldb:mem:testdb");
        assert_eq!(parsed.protocol(), "jdbc:hsqldb:");
        assert!(parsed.is_file_based());
        assert_eq!(parsed.database_name(), "testdb");
        assert_eq!(parsed.property_value(keys::MODE), Some("MEMORY"));
    }

    #[test]
    fn test_file_forms() {
        let parsed = parse("jdbc:hsqldb:file:/opt/db/testdb");
        assert_eq!(parsed.database_name(), "/opt/db/testdb");
        assert_eq!(parsed.property_value(keys::MODE), Some("FILE"));

        let implied = parse("jdbc:hsqldb:/data/mydb");
        assert_eq!(implied.database_name(), "/data/mydb");
        assert_eq!(implied.property_value(keys::MODE), Some("FILE"));
    }

    #[test]
    fn test_resource() {
        let parsed = parse("jdbc:hsqldb:res:/org/mydatabase/mydb");
        assert_eq!(parsed.database_name(), "/org/mydatabase/mydb");
        assert_eq!(parsed.property_value(keys::MODE), Some("RESOURCE"));
    }

    #[test]
    fn test_network_schemes() {
        let cases = [
            ("jdbc:hsqldb:hsql://localhost:9001/testdb", "localhost", 9001, "testdb", "HSQL"),
            ("jdbc:hsqldb:hsqls://dbserver:9002/production", "dbserver", 9002, "production", "HSQLS"),
            ("jdbc:hsqldb:http://localhost:8080/mydb", "localhost", 8080, "mydb", "HTTP"),
            ("jdbc:hsqldb:https://secure.example.com:8443/securedb", "secure.example.com", 8443, "securedb", "HTTPS"),
        ];
        for (url, host, port, db, mode) in cases {
            let parsed = parse(url);
            assert_eq!(parsed.hosts(), &[Host::with_port(host, port)], "{}", url);
            assert_eq!(parsed.database_name(), db, "{}", url);
            assert_eq!(parsed.property_value(keys::MODE), Some(mode), "{}", url);
        }
    }

    #[test]
    fn test_path_properties() {
        let parsed = parse("jdbc:hsqldb:mem:testdb;shutdown=true;hsqldb.tx=mvcc");
        assert_eq!(parsed.database_name(), "testdb");
        assert_eq!(parsed.property_value("shutdown"), Some("true"));
        assert_eq!(parsed.property_value("hsqldb.tx"), Some("mvcc"));
    }

    #[test]
    fn test_explicit_mode_wins() {
        let parsed = parse("jdbc:hsqldb:mem:testdb;MODE=Custom");
        assert_eq!(parsed.property_value(keys::MODE), Some("Custom"));
    }
}
