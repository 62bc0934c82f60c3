//! Collection protocol and the index algebra shared by composite collections.

#[macro_use]
pub(crate) mod precondition;
#[macro_use]
mod position;

pub(crate) mod cache;
mod collection;
mod impls;
mod iter;
pub mod linear;
pub mod walk;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::*;
pub use iter::*;
pub use position::*;
