//! Specification implementations.
//!
//! Each criterion lives in its own type. Adding one means adding a new
//! type that implements `Specification`; nothing here has to change.

pub mod and;
pub mod attribute;
pub mod product;

// Re-export for convenience
pub use and::{all_of, AndSpecification, AnySpecification, SpecificationExt};
pub use attribute::{AttributeEquals, AttributeValue};
pub use product::{
    color_is, name_is, size_is, ColorSpecification, NameSpecification, SizeSpecification,
};
