//! Market data: the raw price bars a scene animates.

pub mod value_objects;

pub use value_objects::*;
