//! A growable vector type with value semantics, copy-on-write storage
//! sharing and inline storage for a single element.
//!
//! [`CowVector`] behaves like an ordinary vector from the outside. On the
//! inside, clones of a heap-backed vector share one ownership-counted
//! buffer until one of them mutates and clones the buffer for itself,
//! and vectors of zero or one element store that element inline without
//! touching the heap.
//!
//! ```
//! use cow_vec::CowVector;
//!
//! let mut a = CowVector::new();
//! a.push(1);
//! a.push(2);
//! a.push(3);
//!
//! // Cheap: `b` shares `a`'s buffer.
//! let mut b = a.clone();
//!
//! // The first mutation clones the buffer, `a` is unaffected.
//! b.push(4);
//!
//! assert_eq!(a.as_slice(), &[1, 2, 3]);
//! assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
//! ```
//!
//! The ownership count is not atomic; a vector can be sent to another
//! thread only by cloning its contents first.

mod raw;
mod vector;

pub use vector::{swap, CowVector, IntoIter};
