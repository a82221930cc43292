use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Ordered property map. Insertion order follows the URL; keys are
/// case-sensitive exactly as written.
pub type Properties = IndexMap<String, Property>;

/// A database endpoint. The hostname is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    hostname: String,
    port: Option<u32>,
    /// Named instance on the physical host (SQL Server `host\INSTANCE`).
    instance: Option<String>,
}

impl Host {
    /// Create a host without port or instance.
    ///
    /// # Panics
    ///
    /// Panics if `hostname` is blank. Parsers check for blank hosts before
    /// constructing one and report a syntax error instead.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self::build(hostname.into(), None, None)
    }

    pub fn with_port(hostname: impl Into<String>, port: u32) -> Self {
        Self::build(hostname.into(), Some(port), None)
    }

    pub fn with_instance(
        hostname: impl Into<String>,
        instance: impl Into<String>,
        port: Option<u32>,
    ) -> Self {
        Self::build(hostname.into(), port, Some(instance.into()))
    }

    /// Same port and instance under a different hostname.
    pub(crate) fn renamed(&self, hostname: String) -> Self {
        Self::build(hostname, self.port, self.instance.clone())
    }

    fn build(hostname: String, port: Option<u32>, instance: Option<String>) -> Self {
        assert!(!hostname.trim().is_empty(), "hostname cannot be blank");
        Self {
            hostname,
            port,
            instance,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> Option<u32> {
        self.port
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hostname)?;
        if let Some(instance) = self.instance.as_deref().filter(|i| !i.trim().is_empty()) {
            write!(f, "\\{}", instance)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Which region of the URL a property was lexically taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertySource {
    /// After `?` (e.g. `jdbc:mysql://h/db?useSSL=true`).
    Query,
    /// Embedded in the path with `;` (e.g. `jdbc:sqlserver://h;encrypt=true`).
    Path,
    /// Computed by the parser from the URL structure (`MODE`, `DRIVER_TYPE`).
    Derived,
    /// Pulled out of a structured descriptor (Oracle `SERVICE_NAME`, `SID`).
    Descriptor,
}

impl fmt::Display for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertySource::Query => write!(f, "query"),
            PropertySource::Path => write!(f, "path"),
            PropertySource::Derived => write!(f, "derived"),
            PropertySource::Descriptor => write!(f, "descriptor"),
        }
    }
}

/// A property value tagged with its provenance. Flags have an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub source: PropertySource,
    pub value: String,
}

impl Property {
    pub fn new(source: PropertySource, value: impl Into<String>) -> Self {
        Self {
            source,
            value: value.into(),
        }
    }
}

/// A fully decomposed JDBC URL.
///
/// Built once by a dialect parser and immutable afterwards. Equality and
/// hashing are structural over every field, including the original input
/// and property order.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedUrl {
    original_url: String,
    product: Product,
    protocol: String,
    hosts: Vec<Host>,
    database_name: String,
    properties: Properties,
}

impl ParsedUrl {
    pub(crate) fn new(
        original_url: &str,
        product: Product,
        hosts: Vec<Host>,
        database_name: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            original_url: original_url.to_string(),
            product,
            protocol: product.url_prefix().to_string(),
            hosts,
            database_name: database_name.into(),
            properties,
        }
    }

    /// The input string, verbatim.
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Canonical matched prefix, e.g. `"jdbc:postgresql:"`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Hosts in the order written, which is failover priority.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn primary_host(&self) -> Option<&Host> {
        self.hosts.first()
    }

    /// Database name, file path, memory tag, service name or SID.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn property_value(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|p| p.value.as_str())
    }

    /// Key/value view of the properties that came from `source`, in URL order.
    pub fn properties_by_source(&self, source: PropertySource) -> IndexMap<&str, &str> {
        self.properties
            .iter()
            .filter(|(_, p)| p.source == source)
            .map(|(k, p)| (k.as_str(), p.value.as_str()))
            .collect()
    }

    /// Key/value view of all properties, provenance dropped.
    pub fn property_values(&self) -> IndexMap<&str, &str> {
        self.properties
            .iter()
            .map(|(k, p)| (k.as_str(), p.value.as_str()))
            .collect()
    }

    /// No hosts means the database lives in a file, in memory, or in a resource.
    pub fn is_file_based(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn is_network_based(&self) -> bool {
        !self.hosts.is_empty()
    }
}

// IndexMap equality ignores order, so compare entry sequences instead to stay
// consistent with the order-sensitive Hash below.
impl PartialEq for ParsedUrl {
    fn eq(&self, other: &Self) -> bool {
        self.original_url == other.original_url
            && self.product == other.product
            && self.protocol == other.protocol
            && self.hosts == other.hosts
            && self.database_name == other.database_name
            && self.properties.iter().eq(other.properties.iter())
    }
}

impl Eq for ParsedUrl {}

impl Hash for ParsedUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.original_url.hash(state);
        self.product.hash(state);
        self.protocol.hash(state);
        self.hosts.hash(state);
        self.database_name.hash(state);
        self.properties.len().hash(state);
        for (key, property) in &self.properties {
            key.hash(state);
            property.hash(state);
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hosts: Vec<String> = self.hosts.iter().map(Host::to_string).collect();
        write!(
            f,
            "JdbcUrl{{type={}, protocol='{}', hosts=[{}], database='{}', properties={} entries}}",
            self.product,
            self.protocol,
            hosts.join(", "),
            self.database_name,
            self.properties.len()
        )
    }
}
