//! Fixed arity heterogeneous products, used both as elements and as composite
//! positions of product collections.

mod arith;
mod tuple;
mod uniform;

pub use tuple::*;
pub use uniform::*;
