mod dyn_vec;
mod strategies;

pub use dyn_vec::DynVec;
