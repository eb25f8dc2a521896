//! The uniform matroid of rank `k`: a set is independent iff it has at most `k` elements.
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use fnv::FnvHashSet;
use tracing::{debug, trace};

use crate::error::{MatroidError, MatroidResult, Violation};
use crate::matroid::{Element, Matroid};

/// Tracks a selection under a cardinality constraint.
///
/// ```
/// use good_matroid::{Matroid, UniformMatroid};
///
/// let mut m = UniformMatroid::new(2)?;
/// m.add(5)?;
/// m.add(7)?;
/// assert!(!m.can_add(9));
/// assert_eq!(m.all_swaps(9), vec![5, 7]);
/// assert!(m.can_swap(9, 5)?);
/// m.remove(5)?;
/// assert!(m.can_add(9));
/// # Ok::<_, good_matroid::MatroidError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformMatroid {
    /// Ordered so that enumeration is ascending and reproducible
    current: BTreeSet<Element>,
    k: usize,
}

impl UniformMatroid {
    /// Create an empty tracker that accepts at most `k` elements.
    /// Fails with [MatroidError::InvalidArgument] if `k` is negative.
    pub fn new(k: i32) -> MatroidResult<Self> {
        let k = usize::try_from(k).map_err(|_| MatroidError::InvalidArgument(k))?;
        debug!(k, "created uniform matroid");
        Ok(UniformMatroid {
            current: BTreeSet::new(),
            k,
        })
    }

    /// The cardinality bound
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether the tracked set already holds `k` elements
    pub fn is_full(&self) -> bool {
        self.current.len() >= self.k
    }
}

impl Matroid for UniformMatroid {
    fn reset(&mut self) {
        debug!(k = self.k, dropped = self.current.len(), "reset uniform matroid");
        self.current.clear();
    }

    fn can_add(&self, _element: Element) -> bool {
        self.current.len() < self.k
    }

    /// The size does not change, so any tracked `swap` works, even if `element` is tracked.
    fn can_swap(&self, _element: Element, swap: Element) -> MatroidResult<bool> {
        if self.current.contains(&swap) {
            Ok(true)
        } else {
            debug!(swap, "swap partner is not tracked");
            Err(Violation::NotInCurrent { element: swap }.into())
        }
    }

    fn all_swaps(&self, _element: Element) -> Vec<Element> {
        self.current.iter().copied().collect()
    }

    fn add(&mut self, element: Element) -> MatroidResult<()> {
        if !self.can_add(element) {
            debug!(element, k = self.k, "rejected add on a full set");
            return Err(Violation::CannotAdd { element, k: self.k }.into());
        }
        self.current.insert(element);
        trace!(element, len = self.current.len(), "added");
        Ok(())
    }

    fn remove(&mut self, element: Element) -> MatroidResult<()> {
        if !self.current.remove(&element) {
            debug!(element, "rejected removal of an untracked element");
            return Err(Violation::NotInCurrent { element }.into());
        }
        trace!(element, len = self.current.len(), "removed");
        Ok(())
    }

    /// Duplicates are counted once.
    fn is_feasible(&self, elements: &[Element]) -> bool {
        if elements.len() <= self.k {
            return true;
        }
        let distinct: FnvHashSet<Element> = elements.iter().copied().collect();
        distinct.len() <= self.k
    }

    fn current_is_feasible(&self) -> bool {
        self.current.len() <= self.k
    }

    /// In ascending order
    fn current(&self) -> Vec<Element> {
        self.current.iter().copied().collect()
    }

    fn in_current(&self, element: Element) -> bool {
        self.current.contains(&element)
    }

    fn len(&self) -> usize {
        self.current.len()
    }

    fn clone_box(&self) -> Box<dyn Matroid> {
        Box::new(self.clone())
    }
}

/// Writes the tracked set followed by the fill level, as in `{5, 7} (2/2)`
impl Display for UniformMatroid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.current.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}} ({}/{})", self.current.len(), self.k)
    }
}
