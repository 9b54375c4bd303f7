//! Composite criteria.
//!
//! Conjunction is the only operator needed so far. Composites own their
//! children, so a chain is a tree fixed at construction time and can never
//! contain a cycle.

use crate::traits::Specification;

/// Satisfied when both `left` and `right` are.
///
/// `right` is not evaluated when `left` already fails.
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    left: A,
    right: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.left.describe(), self.right.describe())
    }
}

/// Satisfied by every item; the identity for [`all_of`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySpecification;

impl<T> Specification<T> for AnySpecification {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "ANY".to_string()
    }
}

/// Method-style combinators for every specification.
///
/// ```ignore
/// let large_green = color_is(Color::Green).and(size_is(Size::Large));
/// ```
pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S> SpecificationExt<T> for S where S: Specification<T> {}

/// Conjunction of any number of boxed criteria, left-nested.
///
/// An empty list is satisfied by everything.
pub fn all_of<T: 'static>(
    specs: impl IntoIterator<Item = Box<dyn Specification<T>>>,
) -> Box<dyn Specification<T>> {
    let mut specs = specs.into_iter();
    let Some(first) = specs.next() else {
        return Box::new(AnySpecification);
    };

    specs.fold(first, |acc, next| -> Box<dyn Specification<T>> {
        Box::new(AndSpecification::new(acc, next))
    })
}
