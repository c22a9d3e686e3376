//! Static tables emitted once per declared union and enum

mod field;
pub use field::*;

mod union_;
pub use union_::*;

mod enum_;
pub use enum_::*;

mod ttype;
pub use ttype::*;
