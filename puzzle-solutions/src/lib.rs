//! Puzzle solutions with automatic registration
//!
//! Each solution derives `AutoRegisterSolver`, so linking this crate is enough
//! for `RegistryBuilder::register_plugins` to find it.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
