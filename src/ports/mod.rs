// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) through which the registry
//! reaches its external collaborators: format drivers, the filesystem, and the
//! host application's module and path conventions. These traits are implemented
//! by adapters in the adapters layer.

pub mod filesystem;
pub mod lazy_load;
pub mod parser;

// Re-export commonly used types
pub use filesystem::FileSystem;
pub use lazy_load::{LazyPathStrategy, ModuleResolver};
pub use parser::ConfigParser;
