//! Product → dialect bindings.
//!
//! The registry is an ordered list built once and read-only afterwards. A
//! lookup returns the first binding that claims the product, so a product
//! listed twice is always served by its earliest binding.

use crate::dialect::Dialect;
use crate::product::Product;

/// One dialect and the products it parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub products: &'static [Product],
    pub dialect: Dialect,
}

impl Binding {
    pub const fn new(products: &'static [Product], dialect: Dialect) -> Self {
        Self { products, dialect }
    }

    pub fn claims(&self, product: Product) -> bool {
        self.products.contains(&product)
    }
}

/// Ordered collection of bindings consulted by the parser facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    bindings: Vec<Binding>,
}

const STANDARD_BINDINGS: [Binding; 8] = [
    Binding::new(&[Product::MySql, Product::MariaDb], Dialect::GenericNetwork),
    Binding::new(&[Product::PostgreSql], Dialect::GenericNetwork),
    Binding::new(&[Product::Oracle], Dialect::Oracle),
    Binding::new(&[Product::SqlServer], Dialect::SqlServer),
    Binding::new(&[Product::H2], Dialect::H2),
    Binding::new(&[Product::Hsqldb], Dialect::Hsqldb),
    Binding::new(&[Product::Derby], Dialect::Derby),
    Binding::new(&[Product::Sqlite], Dialect::Sqlite),
];

impl Registry {
    /// A registry with an explicit binding list, in lookup order.
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// Every supported product bound to its dialect.
    pub fn standard() -> Self {
        Self::new(STANDARD_BINDINGS.to_vec())
    }

    /// First dialect claiming `product`, if any.
    pub fn dialect_for(&self, product: Product) -> Option<Dialect> {
        self.bindings
            .iter()
            .find(|binding| binding.claims(product))
            .map(|binding| binding.dialect)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
