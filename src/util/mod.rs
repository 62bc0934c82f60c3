//! Generic helpers around shared values.

mod cow;
mod object_set;

pub use cow::*;
pub use object_set::*;
