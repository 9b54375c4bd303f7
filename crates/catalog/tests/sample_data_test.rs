//! The catalog shipped in `data/` must stay loadable.

use catalog::{Catalog, Color, Size};
use std::path::Path;

#[test]
fn test_shipped_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/products.txt");
    let catalog = Catalog::load_from_file(&path).unwrap();

    assert_eq!(catalog.len(), 7);

    let house = catalog.get("P0003").unwrap();
    assert_eq!(house.name, "House");
    assert_eq!(house.color, Color::Blue);
    assert_eq!(house.size, Size::Large);
    assert_eq!(house.category.as_deref(), Some("real estate"));
    assert!(catalog.products().iter().all(|p| p.price > 0.0));
}
