#![doc = include_str!("../README.md")]

use thrifty_macros_parse::*;

mod renamerule;
pub use renamerule::*;

mod attributes;
pub use attributes::*;

mod process_enum;
mod process_union;

mod derive;
pub use derive::*;
