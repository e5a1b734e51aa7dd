//! Register database documents and well-known generator constants.
//!
//! The document layout follows mesa's `src/amd/registers/*.json` files.

pub mod mapping;
pub mod specs;

pub use mapping::{RegisterDatabase, RegisterMap, RegisterMapping};
