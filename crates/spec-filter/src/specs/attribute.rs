//! Attribute equality: the building block for single-field criteria.

use crate::traits::Specification;
use catalog::{Color, Size};
use std::fmt;

/// A value an attribute can be compared against.
///
/// Text compares case-insensitively; everything else uses plain equality.
pub trait AttributeValue: fmt::Debug + Send + Sync {
    fn matches(&self, expected: &Self) -> bool;
}

impl AttributeValue for String {
    fn matches(&self, expected: &Self) -> bool {
        self.chars()
            .flat_map(char::to_lowercase)
            .eq(expected.chars().flat_map(char::to_lowercase))
    }
}

macro_rules! exact_attribute_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn matches(&self, expected: &Self) -> bool {
                    self == expected
                }
            }
        )*
    };
}

exact_attribute_value!(bool, i16, i32, u32, i64, u64, Color, Size);

/// Satisfied when the selected attribute of an item equals `expected`.
///
/// ## Example
/// ```ignore
/// fn color_of(product: &Product) -> &Color {
///     &product.color
/// }
///
/// let green = AttributeEquals::new("color", color_of, Color::Green);
/// ```
pub struct AttributeEquals<T, V> {
    attribute: &'static str,
    selector: fn(&T) -> &V,
    expected: V,
}

impl<T, V: AttributeValue> AttributeEquals<T, V> {
    /// # Arguments
    /// * `attribute` - Attribute name, only used in descriptions
    /// * `selector` - Picks the attribute out of an item
    /// * `expected` - The value the attribute must equal
    pub fn new(attribute: &'static str, selector: fn(&T) -> &V, expected: V) -> Self {
        Self {
            attribute,
            selector,
            expected,
        }
    }

    pub fn expected(&self) -> &V {
        &self.expected
    }
}

impl<T, V: AttributeValue> Specification<T> for AttributeEquals<T, V> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.selector)(item).matches(&self.expected)
    }

    fn describe(&self) -> String {
        format!("{} == {:?}", self.attribute, self.expected)
    }
}

impl<T, V: AttributeValue> fmt::Debug for AttributeEquals<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeEquals")
            .field("attribute", &self.attribute)
            .field("expected", &self.expected)
            .finish()
    }
}
