//! The in-memory product catalog.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Color, Product, Size};
use std::path::Path;

/// Ordered collection of products.
///
/// Insertion order is preserved; filtering relies on it to produce results
/// in a predictable order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The four products used throughout the demo and tests
    pub fn sample() -> Self {
        Self::from(vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
            Product::new("Camisa", Color::Green, Size::Large),
        ])
    }

    /// Load a catalog file (see [`parser`] for the format).
    ///
    /// Ids are assigned from the position of each product in the file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_products_file(path)?;
        tracing::info!("Loaded {} products from {}", products.len(), path.display());

        if products.is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "{} contains no products",
                path.display()
            )));
        }

        let products = products
            .into_iter()
            .enumerate()
            .map(|(idx, product)| product.with_id(format!("P{:04}", idx + 1)))
            .collect::<Vec<_>>();

        Ok(Catalog::from(products))
    }

    /// All products, in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
    }

    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_catalog_order() {
        let catalog = Catalog::sample();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Tree", "House", "Camisa"]);
    }

    #[test]
    fn test_load_from_file_assigns_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# shop").unwrap();
        writeln!(file, "Apple::green::small::0.5::100::fruit").unwrap();
        writeln!(file, "House::blue::large").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].id.as_deref(), Some("P0001"));
        assert_eq!(catalog.get("P0002").unwrap().name, "House");
    }

    #[test]
    fn test_load_file_without_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing yet").unwrap();

        let result = Catalog::load_from_file(file.path());
        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load_from_file(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get("P0001").is_none());
    }
}
