//! # Catalog Crate
//!
//! Products and the catalog that holds them.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Product, Color, Size, User, Payment)
//! - **parser**: Parse catalog files into products
//! - **index**: The in-memory `Catalog`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/products.txt"))?;
//! for product in &catalog {
//!     println!("{}", product);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use types::{
    Color,
    Payment,
    PaymentType,
    Product,
    Size,
    User,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_insert_product() {
        let mut catalog = Catalog::new();

        let product = Product::new("Tree", Color::Green, Size::Large)
            .with_id("T1")
            .with_price(120.0)
            .with_quantity(4)
            .with_category("garden");

        catalog.insert(product.clone());

        let retrieved = catalog.get("T1").unwrap();
        assert_eq!(retrieved, &product);
        assert_eq!(retrieved.category.as_deref(), Some("garden"));
    }
}
