//! Composite collections whose elements or positions are products.
//!
//! Every family comes in arities 2 to 9 and implements the collection protocol as
//! strongly as its constituents allow. Cached facts about constituents are reset
//! by the `set_*` methods, the only way to mutate a constituent in place.

mod adjacent;
mod chain;
mod product;
mod zip;

pub use adjacent::*;
pub use chain::*;
pub use product::*;
pub use zip::*;
