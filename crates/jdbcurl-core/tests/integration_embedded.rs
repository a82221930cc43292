//! Integration tests for file, memory and resource URLs (no hosts).

use jdbcurl_core::{keys, parse, PropertySource};
use jdbcurl_testutil::{assert_property, assert_property_keys, file_urls};

#[test]
fn test_file_fixtures_decompose() {
    for case in file_urls() {
        let parsed = parse(case.url).unwrap_or_else(|e| panic!("{}: {}", case.url, e));
        case.assert_matches(&parsed);
        assert!(parsed.hosts().is_empty());
        assert!(parsed.primary_host().is_none());
        assert!(
            parsed.property(keys::MODE).is_some(),
            "{} should carry a MODE",
            case.url
        );
    }
}

#[test]
fn test_explicit_mode_beats_local_default() {
    let parsed = parse("jdbc:h2:mem:testdb;MODE=MySQL").unwrap();
    assert_eq!(parsed.property_value(keys::MODE), Some("MySQL"));

    let hsqldb = parse("jdbc:hsqldb:file:/tmp/db;MODE=Custom").unwrap();
    assert_eq!(hsqldb.property_value(keys::MODE), Some("Custom"));
}

#[test]
fn test_derived_mode_overrides_user_value_where_structural() {
    let derby = parse("jdbc:derby:memory:db;MODE=x").unwrap();
    assert_property(&derby, keys::MODE, "MEMORY", PropertySource::Derived);

    let sqlite = parse("jdbc:sqlite:app.db?MODE=x").unwrap();
    assert_property(&sqlite, keys::MODE, "FILE", PropertySource::Derived);
}

#[test]
fn test_h2_property_regions() {
    let path = parse("jdbc:h2:file:/data/app;DB_CLOSE_DELAY=-1;IFEXISTS=TRUE").unwrap();
    assert_property(&path, "DB_CLOSE_DELAY", "-1", PropertySource::Path);
    assert_property_keys(&path, &["DB_CLOSE_DELAY", "IFEXISTS", keys::MODE]);

    let query = parse("jdbc:h2:mem:app?DB_CLOSE_DELAY=-1").unwrap();
    assert_property(&query, "DB_CLOSE_DELAY", "-1", PropertySource::Query);
}

#[test]
fn test_hsqldb_resource() {
    let parsed = parse("jdbc:hsqldb:res:/org/mydatabase/mydb").unwrap();
    assert_eq!(parsed.database_name(), "/org/mydatabase/mydb");
    assert_property(&parsed, keys::MODE, "RESOURCE", PropertySource::Derived);
}

#[test]
fn test_sqlite_paths_verbatim() {
    for (url, db) in [
        ("jdbc:sqlite:C:\\data\\app.db", "C:\\data\\app.db"),
        ("jdbc:sqlite:./relative/app.db", "./relative/app.db"),
        ("jdbc:sqlite:/abs/with space.db", "/abs/with space.db"),
        ("jdbc:sqlite:file%20name.db", "file%20name.db"),
    ] {
        assert_eq!(parse(url).unwrap().database_name(), db);
    }
}

#[test]
fn test_sqlite_memory_is_canonical() {
    let a = parse("jdbc:sqlite::memory:").unwrap();
    let b = parse("jdbc:sqlite:memory:").unwrap();
    assert_eq!(a.database_name(), b.database_name());
    assert_ne!(a, b, "original input differs, so the results differ");
}

#[test]
fn test_derby_embedded_property_count() {
    let parsed = parse("jdbc:derby:mydb;create=true;user=app;password=secret;territory=en_US").unwrap();
    assert_eq!(parsed.properties().len(), 5);
    assert_property(&parsed, keys::MODE, "EMBEDDED", PropertySource::Derived);
}
