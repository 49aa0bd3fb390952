//! Grid geometry: the pure transforms that reduce every move direction to
//! a single slide-left.

pub mod transform;

pub use transform::{orient, restore, reverse_rows, transpose};
