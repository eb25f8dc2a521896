//! The [Matroid] trait is the capability an optimization driver uses to keep
//! its running solution feasible.
//!
//! A driver holds a `Box<dyn Matroid>`, asks [Matroid::can_add],
//! [Matroid::can_swap] or [Matroid::all_swaps] for every candidate element,
//! then commits the chosen move with [Matroid::add] and [Matroid::remove].
//! Branching algorithms call [Matroid::clone_box] to explore a branch on an
//! independent copy.
//!
//! Implement this trait to add a new kind of constraint
//! (partition, graphic, ...) without touching the driver.
use std::fmt::Debug;

use crate::error::MatroidResult;

/// An element of the ground set, as numbered by the driver.
pub type Element = i32;

/// A matroid constraint together with the set of elements selected so far.
///
/// All the queries are pure. The mutators return an error, and leave the
/// tracked set untouched, when their precondition does not hold.
pub trait Matroid: Debug + Send {
    /// Empty the tracked set.
    fn reset(&mut self);

    /// Whether adding `element` to the tracked set would keep it independent.
    /// `element` is assumed not to be tracked already.
    fn can_add(&self, element: Element) -> bool;

    /// Whether replacing `swap` with `element` would keep the tracked set independent.
    ///
    /// Fails with [Violation::NotInCurrent](crate::Violation::NotInCurrent)
    /// if `swap` is not tracked.
    fn can_swap(&self, element: Element, swap: Element) -> MatroidResult<bool>;

    /// Every tracked element that can be swapped out for `element`.
    /// The returned vector is a copy, not a view on the tracked set.
    fn all_swaps(&self, element: Element) -> Vec<Element>;

    /// Add `element` to the tracked set.
    ///
    /// Fails with [Violation::CannotAdd](crate::Violation::CannotAdd)
    /// if [Matroid::can_add] does not hold.
    fn add(&mut self, element: Element) -> MatroidResult<()>;

    /// Remove `element` from the tracked set.
    ///
    /// Fails with [Violation::NotInCurrent](crate::Violation::NotInCurrent)
    /// if `element` is not tracked.
    fn remove(&mut self, element: Element) -> MatroidResult<()>;

    /// Whether an arbitrary set of distinct elements is independent.
    /// Does not look at the tracked set.
    fn is_feasible(&self, elements: &[Element]) -> bool;

    /// Whether the tracked set is independent.
    fn current_is_feasible(&self) -> bool {
        self.is_feasible(&self.current())
    }

    /// A copy of the tracked elements.
    fn current(&self) -> Vec<Element>;

    /// Whether `element` is tracked.
    fn in_current(&self, element: Element) -> bool;

    /// Number of tracked elements
    fn len(&self) -> usize {
        self.current().len()
    }

    /// Whether no element is tracked
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A deep copy of the constraint and of the tracked set.
    /// The copy shares no state with `self`.
    fn clone_box(&self) -> Box<dyn Matroid>;
}

impl Clone for Box<dyn Matroid> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatroidError, UniformMatroid, Violation};

    /// Accepts no element at all, and only relies on the default methods.
    #[derive(Debug, Clone)]
    struct Empty;

    impl Matroid for Empty {
        fn reset(&mut self) {}
        fn can_add(&self, _element: Element) -> bool {
            false
        }
        fn can_swap(&self, _element: Element, swap: Element) -> MatroidResult<bool> {
            Err(Violation::NotInCurrent { element: swap }.into())
        }
        fn all_swaps(&self, _element: Element) -> Vec<Element> {
            vec![]
        }
        fn add(&mut self, element: Element) -> MatroidResult<()> {
            Err(Violation::CannotAdd { element, k: 0 }.into())
        }
        fn remove(&mut self, element: Element) -> MatroidResult<()> {
            Err(Violation::NotInCurrent { element }.into())
        }
        fn is_feasible(&self, elements: &[Element]) -> bool {
            elements.is_empty()
        }
        fn current(&self) -> Vec<Element> {
            vec![]
        }
        fn in_current(&self, _element: Element) -> bool {
            false
        }
        fn clone_box(&self) -> Box<dyn Matroid> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn default_methods() {
        let m = Empty;
        assert!(m.current_is_feasible());
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn drivers_mix_variants() {
        let mut constraints: Vec<Box<dyn Matroid>> =
            vec![Box::new(Empty), Box::new(UniformMatroid::new(1).unwrap())];
        let accepted: Vec<bool> = constraints.iter().map(|m| m.can_add(3)).collect();
        assert_eq!(accepted, vec![false, true]);
        assert_eq!(
            constraints[0].add(3),
            Err(MatroidError::PreconditionViolation(Violation::CannotAdd {
                element: 3,
                k: 0
            }))
        );
        constraints[1].add(3).unwrap();
        assert_eq!(constraints[1].len(), 1);
    }

    #[test]
    fn boxed_clone_is_independent() {
        let mut original: Box<dyn Matroid> = Box::new(UniformMatroid::new(3).unwrap());
        original.add(1).unwrap();
        let mut copy = original.clone();
        copy.add(2).unwrap();
        original.remove(1).unwrap();
        assert_eq!(original.current(), Vec::<Element>::new());
        assert_eq!(copy.current(), vec![1, 2]);
    }
}
