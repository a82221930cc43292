use jdbcurl_core::{Host, ParsedUrl, Product, PropertySource};

/// A URL with the decomposition every parser must agree on.
#[derive(Debug, Clone)]
pub struct UrlCase {
    pub url: &'static str,
    pub product: Product,
    pub hosts: Vec<Host>,
    pub database: &'static str,
}

impl UrlCase {
    fn new(url: &'static str, product: Product, hosts: Vec<Host>, database: &'static str) -> Self {
        Self {
            url,
            product,
            hosts,
            database,
        }
    }

    pub fn is_file_based(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Assert that `parsed` matches this case's product, hosts and database.
    pub fn assert_matches(&self, parsed: &ParsedUrl) {
        assert_eq!(parsed.product(), self.product, "product of {}", self.url);
        assert_eq!(parsed.hosts(), self.hosts.as_slice(), "hosts of {}", self.url);
        assert_eq!(parsed.database_name(), self.database, "database of {}", self.url);
        assert_eq!(parsed.original_url(), self.url);
        assert_eq!(
            parsed.is_file_based(),
            self.is_file_based(),
            "file-based classification of {}",
            self.url
        );
    }
}

/// Shorthand for a host with a port.
pub fn host(name: &str, port: u32) -> Host {
    Host::with_port(name, port)
}

/// One or more realistic URLs per supported product.
pub fn sample_urls() -> Vec<UrlCase> {
    vec![
        UrlCase::new(
            "jdbc:mysql://localhost:3306/mydb",
            Product::MySql,
            vec![host("localhost", 3306)],
            "mydb",
        ),
        UrlCase::new(
            "jdbc:mysql://primary:3306,replica1:3307,replica2:3308/app?failOverReadOnly=false",
            Product::MySql,
            vec![host("primary", 3306), host("replica1", 3307), host("replica2", 3308)],
            "app",
        ),
        UrlCase::new(
            "jdbc:mariadb://db.internal:3306/shop?useSSL=true",
            Product::MariaDb,
            vec![host("db.internal", 3306)],
            "shop",
        ),
        UrlCase::new(
            "jdbc:postgresql://localhost:5432/postgres?user=postgres&password=secret",
            Product::PostgreSql,
            vec![host("localhost", 5432)],
            "postgres",
        ),
        UrlCase::new(
            "jdbc:postgresql://pg.example.com/analytics",
            Product::PostgreSql,
            vec![Host::new("pg.example.com")],
            "analytics",
        ),
        UrlCase::new(
            "jdbc:oracle:thin:@localhost:1521:ORCL",
            Product::Oracle,
            vec![host("localhost", 1521)],
            "ORCL",
        ),
        UrlCase::new(
            "jdbc:oracle:thin:@//dbhost:1521/XEPDB1",
            Product::Oracle,
            vec![host("dbhost", 1521)],
            "XEPDB1",
        ),
        UrlCase::new(
            "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=localhost)(PORT=1521))(CONNECT_DATA=(SERVICE_NAME=myservice)))",
            Product::Oracle,
            vec![host("localhost", 1521)],
            "myservice",
        ),
        UrlCase::new(
            "jdbc:sqlserver://localhost:1433;databaseName=mydb;encrypt=true",
            Product::SqlServer,
            vec![host("localhost", 1433)],
            "mydb",
        ),
        UrlCase::new(
            "jdbc:sqlserver://localhost\\SQLEXPRESS;databaseName=mydb",
            Product::SqlServer,
            vec![Host::with_instance("localhost", "SQLEXPRESS", None)],
            "mydb",
        ),
        UrlCase::new("jdbc:h2:mem:testdb", Product::H2, vec![], "testdb"),
        UrlCase::new("jdbc:h2:~/test;AUTO_SERVER=TRUE", Product::H2, vec![], "~/test"),
        UrlCase::new(
            "jdbc:h2:tcp://localhost:9092/~/test",
            Product::H2,
            vec![host("localhost", 9092)],
            "~/test",
        ),
        UrlCase::new("jdbc:hsqldb:mem:testdb", Product::Hsqldb, vec![], "testdb"),
        UrlCase::new(
            "jdbc:hsqldb:hsql://localhost:9001/testdb",
            Product::Hsqldb,
            vec![host("localhost", 9001)],
            "testdb",
        ),
        UrlCase::new("jdbc:derby:mydb;create=true", Product::Derby, vec![], "mydb"),
        UrlCase::new("jdbc:derby:memory:scratch", Product::Derby, vec![], "scratch"),
        UrlCase::new(
            "jdbc:derby://localhost:1527/mydb",
            Product::Derby,
            vec![host("localhost", 1527)],
            "mydb",
        ),
        UrlCase::new("jdbc:sqlite:/var/data/app.db", Product::Sqlite, vec![], "/var/data/app.db"),
        UrlCase::new("jdbc:sqlite::memory:", Product::Sqlite, vec![], ":memory:"),
    ]
}

/// Sample URLs that name at least one host.
pub fn network_urls() -> Vec<UrlCase> {
    sample_urls().into_iter().filter(|c| !c.is_file_based()).collect()
}

/// Sample URLs for file, memory or resource databases.
pub fn file_urls() -> Vec<UrlCase> {
    sample_urls().into_iter().filter(UrlCase::is_file_based).collect()
}

/// Inputs every strict parse must reject.
pub fn rejected_urls() -> Vec<&'static str> {
    vec![
        "",
        "   ",
        "not a url",
        "mysql://localhost/db",
        "jdbc:",
        "jdbc:unknownthing://host/db",
        "jdbc:oracle:thin",
        "jdbc:oracle:thin:localhost:1521:ORCL",
        "jdbc:sqlserver://;databaseName=db",
    ]
}

/// Assert a property's value and provenance.
pub fn assert_property(parsed: &ParsedUrl, key: &str, value: &str, source: PropertySource) {
    let property = parsed
        .property(key)
        .unwrap_or_else(|| panic!("{} has no property '{}'", parsed.original_url(), key));
    assert_eq!(property.value, value, "value of '{}' in {}", key, parsed.original_url());
    assert_eq!(property.source, source, "source of '{}' in {}", key, parsed.original_url());
}

/// Assert the property keys, in order.
pub fn assert_property_keys(parsed: &ParsedUrl, keys: &[&str]) {
    let actual: Vec<&str> = parsed.properties().keys().map(String::as_str).collect();
    assert_eq!(actual, keys, "property order of {}", parsed.original_url());
}

/// A thin-driver Oracle URL with a single-address connect descriptor.
pub fn descriptor_url(host: &str, port: u32, service: &str) -> String {
    format!(
        "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST={})(PORT={}))(CONNECT_DATA=(SERVICE_NAME={})))",
        host, port, service
    )
}

/// A descriptor whose address sits `depth` groups deep, for scan cost checks.
pub fn nested_descriptor(depth: usize) -> String {
    let mut url = String::from("jdbc:oracle:thin:@(DESCRIPTION=");
    for _ in 0..depth {
        url.push_str("(ADDRESS_LIST=");
    }
    url.push_str("(ADDRESS=(PROTOCOL=TCP)(HOST=deep.example.com)(PORT=1521))");
    for _ in 0..depth {
        url.push(')');
    }
    url.push_str("(CONNECT_DATA=(SERVICE_NAME=deep)))");
    url
}

/// A descriptor that opens `depth` groups and never closes them.
pub fn unbalanced_descriptor(depth: usize) -> String {
    let mut url = String::from("jdbc:oracle:thin:@(DESCRIPTION=");
    url.push_str(&"(X=".repeat(depth));
    url
}
