//! C IR.

mod ir;

pub use ir::*;
