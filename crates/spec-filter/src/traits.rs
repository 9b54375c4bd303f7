//! Core traits for specification-based filtering.
//!
//! A `Specification` is a single yes/no criterion over an item. A `Filter`
//! applies any specification to a slice of items. The two never know about
//! each other's concrete types, which is what lets new criteria be added
//! without touching the filter or the criteria that already exist.

use crate::filter::Filtered;

/// A criterion an item either satisfies or doesn't.
///
/// Implementations hold only the values they were built with and must not
/// mutate the item or themselves while being evaluated.
///
/// ## Design Note
/// - `Send + Sync` lets independent consumers evaluate the same
///   specification from different threads
/// - `is_satisfied` takes `&self`, so evaluation is repeatable and order
///   independent
pub trait Specification<T>: Send + Sync {
    /// Returns true if `item` meets this criterion
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human readable description, used for logging
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Applies a specification to a slice of items.
///
/// The result is lazy: nothing is evaluated until it is iterated, and
/// calling `filter` again starts over from the beginning.
pub trait Filter<T> {
    /// Returns the items satisfying `spec`, in input order.
    ///
    /// # Arguments
    /// * `items` - The items to filter (borrowed, never modified)
    /// * `spec` - The criterion to evaluate against each item
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Filtered<'a, T, S>
    where
        S: Specification<T> + ?Sized;
}
