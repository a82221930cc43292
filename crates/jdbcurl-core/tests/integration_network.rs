//! Integration tests for host-bearing URLs across every dialect that supports
//! a network form, driven through the public facade.

use jdbcurl_core::{keys, parse, Host, Product, PropertySource};
use jdbcurl_testutil::{assert_property, assert_property_keys, descriptor_url, host, network_urls};

#[test]
fn test_network_fixtures_decompose() {
    for case in network_urls() {
        let parsed = parse(case.url).unwrap_or_else(|e| panic!("{}: {}", case.url, e));
        case.assert_matches(&parsed);
        assert!(parsed.is_network_based());
        assert_eq!(parsed.primary_host(), case.hosts.first());
    }
}

#[test]
fn test_mysql_query_properties_in_order() {
    let parsed = parse(
        "jdbc:mysql://localhost:3306/mydb?useSSL=false&serverTimezone=UTC&allowPublicKeyRetrieval=true",
    )
    .unwrap();
    assert_property_keys(&parsed, &["useSSL", "serverTimezone", "allowPublicKeyRetrieval"]);
    assert_property(&parsed, "serverTimezone", "UTC", PropertySource::Query);
}

#[test]
fn test_mariadb_shares_generic_grammar() {
    let mysql = parse("jdbc:mysql://h1:3306,h2:3307/db?x=1").unwrap();
    let mariadb = parse("jdbc:mariadb://h1:3306,h2:3307/db?x=1").unwrap();
    assert_eq!(mysql.hosts(), mariadb.hosts());
    assert_eq!(mysql.database_name(), mariadb.database_name());
    assert_eq!(mariadb.product(), Product::MariaDb);
    assert_eq!(mariadb.protocol(), "jdbc:mariadb:");
}

#[test]
fn test_postgres_flag_and_ampersand_runs() {
    let parsed = parse("jdbc:postgresql://h/db?ssl&&sslmode=verify-full;;loglevel=2").unwrap();
    assert_property(&parsed, "ssl", "", PropertySource::Query);
    assert_property(&parsed, "sslmode", "verify-full", PropertySource::Query);
    assert_property(&parsed, "loglevel", "2", PropertySource::Query);
    assert_eq!(parsed.properties().len(), 3);
}

#[test]
fn test_unparsable_port_degrades_to_hostname() {
    let parsed = parse("jdbc:postgresql://localhost:notaport/db").unwrap();
    assert_eq!(parsed.hosts(), &[Host::new("localhost:notaport")]);
    assert_eq!(parsed.database_name(), "db");

    let too_big = parse("jdbc:mysql://localhost:99999999999/db").unwrap();
    assert_eq!(too_big.hosts(), &[Host::new("localhost:99999999999")]);
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let parsed = parse("jdbc:mysql://h/db?user=a&ssl=true&user=b").unwrap();
    assert_property(&parsed, "user", "b", PropertySource::Query);
    assert_property_keys(&parsed, &["user", "ssl"]);
}

#[test]
fn test_oracle_sub_formats() {
    let sid = parse("jdbc:oracle:thin:@localhost:1521:ORCL").unwrap();
    assert_eq!(sid.hosts(), &[host("localhost", 1521)]);
    assert_eq!(sid.database_name(), "ORCL");
    assert_property(&sid, keys::SID, "ORCL", PropertySource::Descriptor);
    assert_property(&sid, keys::DRIVER_TYPE, "thin", PropertySource::Derived);

    let service = parse("jdbc:oracle:thin:@//localhost:1521/XEPDB1").unwrap();
    assert_eq!(service.database_name(), "XEPDB1");
    assert_property(&service, keys::SERVICE_NAME, "XEPDB1", PropertySource::Descriptor);

    let url = descriptor_url("localhost", 1521, "myservice");
    let descriptor = parse(&url).unwrap();
    assert_eq!(descriptor.hosts(), &[host("localhost", 1521)]);
    assert_eq!(descriptor.database_name(), "myservice");
    assert_property_keys(
        &descriptor,
        &[keys::DRIVER_TYPE, keys::SERVICE_NAME, keys::DESCRIPTOR],
    );
    assert_eq!(
        descriptor.property_value(keys::DESCRIPTOR),
        url.strip_prefix("jdbc:oracle:thin:")
    );
}

#[test]
fn test_oracle_failover_descriptor_uses_first_address() {
    let parsed = parse(
        "jdbc:oracle:thin:@(DESCRIPTION=(FAILOVER=ON)(ADDRESS_LIST=\
         (ADDRESS=(PROTOCOL=TCP)(HOST=primary.db)(PORT=1521))\
         (ADDRESS=(PROTOCOL=TCP)(HOST=standby.db)(PORT=1522)))\
         (CONNECT_DATA=(SID=PROD)))",
    )
    .unwrap();
    assert_eq!(parsed.hosts(), &[host("primary.db", 1521)]);
    assert_eq!(parsed.database_name(), "PROD");
    assert_property(&parsed, keys::SID, "PROD", PropertySource::Descriptor);
}

#[test]
fn test_sqlserver_instance_without_port() {
    let parsed = parse("jdbc:sqlserver://localhost\\SQLEXPRESS;databaseName=mydb").unwrap();
    let primary = parsed.primary_host().unwrap();
    assert_eq!(primary.hostname(), "localhost");
    assert_eq!(primary.instance(), Some("SQLEXPRESS"));
    assert_eq!(primary.port(), None);
    assert_eq!(parsed.database_name(), "mydb");
    assert_property(&parsed, "databaseName", "mydb", PropertySource::Path);
}

#[test]
fn test_embedded_engines_in_server_mode() {
    let h2 = parse("jdbc:h2:tcp://localhost:9092/~/test;MODE=MySQL").unwrap();
    assert_property(&h2, keys::MODE, "TCP", PropertySource::Derived);

    let hsqldb = parse("jdbc:hsqldb:hsqls://secure:9002/db").unwrap();
    assert_property(&hsqldb, keys::MODE, "HSQLS", PropertySource::Derived);

    let derby = parse("jdbc:derby://localhost:1527/mydb;create=true").unwrap();
    assert_property(&derby, keys::MODE, "NETWORK", PropertySource::Derived);
    assert_property(&derby, "create", "true", PropertySource::Path);
}
