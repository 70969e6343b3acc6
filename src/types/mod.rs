//! Yeson value tree types.

mod value;

pub use value::{Float, Int, Object, Value};
