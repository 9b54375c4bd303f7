//! Ready-made criteria over catalog products.

use super::attribute::AttributeEquals;
use catalog::{Color, Product, Size};

pub type ColorSpecification = AttributeEquals<Product, Color>;
pub type SizeSpecification = AttributeEquals<Product, Size>;
pub type NameSpecification = AttributeEquals<Product, String>;

fn color_of(product: &Product) -> &Color {
    &product.color
}

fn size_of(product: &Product) -> &Size {
    &product.size
}

fn name_of(product: &Product) -> &String {
    &product.name
}

/// Products of the given color
pub fn color_is(color: Color) -> ColorSpecification {
    AttributeEquals::new("color", color_of, color)
}

/// Products of the given size
pub fn size_is(size: Size) -> SizeSpecification {
    AttributeEquals::new("size", size_of, size)
}

/// Products whose name equals `name`, ignoring case
pub fn name_is(name: impl Into<String>) -> NameSpecification {
    AttributeEquals::new("name", name_of, name.into())
}
