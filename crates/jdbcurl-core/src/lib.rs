pub mod config;
pub mod dialect;
pub mod error;
pub mod mask;
pub mod parser;
pub mod primitives;
pub mod product;
pub mod registry;
pub mod types;

// Re-export key types for convenience
pub use dialect::{keys, Dialect};
pub use error::{ConfigError, ErrorKind, JdbcUrlError, Result};
pub use mask::Masker;
pub use parser::{detect_product, is_recognized_url, parse, try_parse, JdbcUrlParser};
pub use product::Product;
pub use registry::Registry;
pub use types::{Host, ParsedUrl, Properties, Property, PropertySource};
