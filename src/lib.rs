//! # Goal
//! Collections composed out of other collections, whose elements and positions
//! are fixed arity products.
//!
//! # Features
//! - Products of arity 2 to 9, with lexicographic order and window pushes.
//! - Collection protocol with ordered indices,
//!   implemented for slices, vectors, deques, and integer ranges.
//! - Composite collections, in arities 2 to 9:
//!     - Chain - concatenation of collections with the same element.
//!     - Product - cartesian product, iterated as an odometer.
//!     - ProductZip - elementwise zip, as long as the shortest constituent.
//!     - Adjacent - overlapping windows of consecutive elements of one collection.
//!
//! # Architecture
//! Every composite index is either a position, a product of constituent indices,
//! or the end. Navigation converts positions to linear indices, does integer
//! arithmetic, and converts back, so a composite collection is as random access
//! as its constituents.
//!
//! Contract violations, like advancing past end, are bugs of the caller and panic.
//! Validity of positions is additionally checked in debug builds, or with
//! `pedantic` feature.

#[macro_use]
pub mod core;

pub mod collection;
pub mod product;
pub mod util;

pub use crate::core::{
    BidirectionalCollection, Collection, LockstepIndex, Position, RandomAccessCollection,
};
