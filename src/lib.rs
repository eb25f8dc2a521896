//! Matroid constraint trackers for submodular maximization.
//!
//! An optimization driver keeps its running solution inside a [Matroid] and asks it,
//! for every candidate, whether the candidate can be added or swapped in
//! while keeping the solution independent.
//!
//! ```rust
//! use good_matroid::{Matroid, UniformMatroid};
//!
//! // Greedily keep the 3 largest weights
//! let weights = [4., 9., 1., 7., 3., 8.];
//! let mut order: Vec<i32> = (0..weights.len() as i32).collect();
//! order.sort_by(|&a, &b| weights[b as usize].partial_cmp(&weights[a as usize]).unwrap());
//!
//! let mut constraint: Box<dyn Matroid> = Box::new(UniformMatroid::new(3)?);
//! for element in order {
//!     if constraint.can_add(element) {
//!         constraint.add(element)?;
//!     }
//! }
//! assert_eq!(constraint.current(), vec![1, 3, 5]);
//! # use good_matroid::MatroidError;
//! # Ok::<_, MatroidError>(())
//! ```

pub use error::{MatroidError, MatroidResult, Violation};
pub use matroid::{Element, Matroid};
pub use uniform_matroid::UniformMatroid;

pub mod error;
pub mod matroid;
mod uniform_matroid;
