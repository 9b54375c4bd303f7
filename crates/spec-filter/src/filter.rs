//! The specification filter and the lazy iterator it produces.

use crate::traits::{Filter, Specification};
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Filters items by any `Specification`.
///
/// Stateless: one instance can be shared freely and reused for any number
/// of calls.
///
/// ## Usage
/// ```ignore
/// let filter = SpecificationFilter;
/// let blue = color_is(Color::Blue);
///
/// for product in filter.filter(catalog.products(), &blue) {
///     println!("{}", product);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecificationFilter;

impl<T> Filter<T> for SpecificationFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Filtered<'a, T, S>
    where
        S: Specification<T> + ?Sized,
    {
        tracing::debug!(
            "Filtering {} items with {}",
            items.len(),
            spec.describe()
        );
        Filtered {
            items: items.iter(),
            spec,
        }
    }
}

/// Shorthand for `SpecificationFilter.filter(items, spec)`
pub fn filter<'a, T, S>(items: &'a [T], spec: &'a S) -> Filtered<'a, T, S>
where
    S: Specification<T> + ?Sized,
{
    SpecificationFilter.filter(items, spec)
}

/// Lazy iterator over the items satisfying a specification.
///
/// Yields references into the original slice, so matches can be compared
/// by identity. Cloning it gives an independent cursor over the remaining
/// items.
pub struct Filtered<'a, T, S: ?Sized> {
    items: slice::Iter<'a, T>,
    spec: &'a S,
}

impl<'a, T, S> Iterator for Filtered<'a, T, S>
where
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between none and all of the remaining items
        (0, Some(self.items.len()))
    }
}

impl<'a, T, S> DoubleEndedIterator for Filtered<'a, T, S>
where
    S: Specification<T> + ?Sized,
{
    fn next_back(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.rfind(|item| spec.is_satisfied(item))
    }
}

impl<T, S> FusedIterator for Filtered<'_, T, S> where S: Specification<T> + ?Sized {}

impl<T, S: ?Sized> Clone for Filtered<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<T, S> fmt::Debug for Filtered<'_, T, S>
where
    S: Specification<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("remaining", &self.items.len())
            .field("spec", &self.spec.describe())
            .finish()
    }
}
