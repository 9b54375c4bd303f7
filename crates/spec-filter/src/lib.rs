//! Specification-based filtering of catalog products.
//!
//! This crate provides:
//! - The `Specification` trait: one yes/no criterion over an item
//! - Criteria for products (color, size, name) built on `AttributeEquals`
//! - `AndSpecification` for combining criteria
//! - `SpecificationFilter`, which lazily applies any criterion to a slice
//!
//! ## Architecture
//! The filter knows nothing about concrete criteria and criteria know
//! nothing about each other. A new criterion is a new type implementing
//! `Specification`; it composes with the existing ones through
//! `AndSpecification` and works with the filter unchanged.
//!
//! ## Example Usage
//! ```ignore
//! use spec_filter::specs::*;
//! use spec_filter::{Filter, SpecificationFilter};
//!
//! let large_green = color_is(Color::Green).and(size_is(Size::Large));
//!
//! let filter = SpecificationFilter;
//! for product in filter.filter(catalog.products(), &large_green) {
//!     println!("{}", product);
//! }
//! ```

pub mod traits;
pub mod specs;
pub mod filter;

// Re-export main types
pub use traits::{Filter, Specification};
pub use filter::{filter, Filtered, SpecificationFilter};
pub use specs::{AndSpecification, SpecificationExt};
